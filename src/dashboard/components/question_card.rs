//! Collapsible question card

use egui::{RichText, Rounding, Sense};

use crate::dashboard::theme::ThemeColors;

/// A seed question with an answer body that collapses
pub struct QuestionCard<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> QuestionCard<'a> {
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self { title, body }
    }

    /// Draw the card. Returns true when it was clicked.
    pub fn show(&self, ui: &mut egui::Ui, collapsed: bool) -> bool {
        let frame = egui::Frame::none()
            .fill(ThemeColors::BG_MEDIUM)
            .rounding(Rounding::same(8.0))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    let arrow = if collapsed { ">" } else { "v" };
                    ui.label(RichText::new(arrow).size(12.0).color(ThemeColors::TEXT_MUTED));
                    ui.add_space(8.0);
                    ui.label(RichText::new(self.title).size(15.0).strong());
                });

                if !collapsed {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(self.body)
                            .size(13.0)
                            .color(ThemeColors::TEXT_SECONDARY),
                    );
                }
            });

        frame.response.interact(Sense::click()).clicked()
    }
}
