//! Dashboard view - story list with filter bar

use egui::{RichText, Rounding, Sense};

use super::ViewContext;
use crate::dashboard::theme::ThemeColors;
use crate::shared::InputEvent;

/// A story row shown on the dashboard
struct StoryRow {
    title: &'static str,
    stage: &'static str,
    updated: &'static str,
}

static STORIES: [StoryRow; 4] = [
    StoryRow { title: "The Lighthouse Keeper", stage: "Seed", updated: "2h ago" },
    StoryRow { title: "Salt and Iron", stage: "Draft", updated: "yesterday" },
    StoryRow { title: "Nine Winters", stage: "Shape", updated: "3 days ago" },
    StoryRow { title: "The Orchard Ledger", stage: "Test", updated: "last week" },
];

/// Render the dashboard view
pub fn render_dashboard_view(ui: &mut egui::Ui, cx: &mut ViewContext<'_>) {
    ui.heading(RichText::new("Dashboard").size(24.0).strong());
    ui.add_space(8.0);
    ui.label(
        RichText::new("Stories awaiting review. Press / to search.")
            .size(14.0)
            .color(ThemeColors::TEXT_SECONDARY),
    );

    ui.add_space(24.0);

    // Filter bar
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add_space(8.0);
        let response = ui.add(
            egui::TextEdit::singleline(&mut *cx.search_query)
                .hint_text("Filter stories...")
                .desired_width(260.0),
        );

        if let Some(field) = cx.coordinator.search_field() {
            if cx.surface.take_focus(field) {
                response.request_focus();
            }
        }
    });

    ui.add_space(16.0);

    let filter = cx.search_query.to_lowercase();
    let rows: Vec<&StoryRow> = STORIES
        .iter()
        .filter(|s| filter.is_empty() || s.title.to_lowercase().contains(&filter))
        .collect();

    if rows.is_empty() {
        ui.label(
            RichText::new("No stories match your search")
                .color(ThemeColors::TEXT_MUTED),
        );
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for row in rows {
            if render_story_row(ui, row) {
                cx.outbox.push(InputEvent::StoryRowClicked);
            }
            ui.add_space(8.0);
        }
    });
}

fn render_story_row(ui: &mut egui::Ui, row: &StoryRow) -> bool {
    let frame = egui::Frame::none()
        .fill(ThemeColors::BG_MEDIUM)
        .rounding(Rounding::same(6.0))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(row.title).size(15.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(row.updated)
                            .size(12.0)
                            .color(ThemeColors::TEXT_MUTED),
                    );
                    ui.add_space(16.0);
                    ui.label(
                        RichText::new(row.stage)
                            .size(12.0)
                            .color(ThemeColors::ACCENT_SOFT),
                    );
                });
            });
        });

    frame.response.interact(Sense::click()).clicked()
}
