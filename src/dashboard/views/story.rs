//! Per-story views: mode tabs, seed questions and the draft/shape/test lists

use egui::RichText;

use super::ViewContext;
use crate::coordinator::GroupKind;
use crate::dashboard::components::QuestionCard;
use crate::dashboard::theme::ThemeColors;
use crate::shared::{ElementRef, InputEvent, Marker};

/// Render the mode tab strip shown above every story mode
pub fn render_mode_tabs(ui: &mut egui::Ui, cx: &mut ViewContext<'_>) {
    let Some(tabs) = cx.coordinator.group(GroupKind::ModeTabs) else {
        return;
    };

    ui.horizontal(|ui| {
        for label in tabs.members() {
            let element = ElementRef::Item(GroupKind::ModeTabs, label.clone());
            if ui.selectable_label(cx.surface.is_active(&element), label.as_str()).clicked() {
                cx.outbox.push(InputEvent::ModeTabClicked {
                    label: label.clone(),
                });
            }
        }
    });
}

/// Render the seed view: one collapsible card per question
pub fn render_seed_view(ui: &mut egui::Ui, cx: &mut ViewContext<'_>) {
    ui.heading(RichText::new("Seed").size(24.0).strong());
    ui.add_space(8.0);
    ui.label(
        RichText::new("Core questions the story must answer")
            .size(14.0)
            .color(ThemeColors::TEXT_SECONDARY),
    );
    ui.add_space(16.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, card) in cx.coordinator.card_ids().iter().enumerate() {
            let collapsed = cx
                .surface
                .has_marker(&ElementRef::Card(card.clone()), Marker::Collapsed);
            let title = format!("Question {}", index + 1);

            if QuestionCard::new(&title, question_body(index)).show(ui, collapsed) {
                cx.outbox.push(InputEvent::CardClicked { card: card.clone() });
            }
            ui.add_space(8.0);
        }
    });
}

fn question_body(index: usize) -> &'static str {
    const BODIES: [&str; 4] = [
        "Who wants something, and what stands in the way?",
        "What does the protagonist believe at the start that is wrong?",
        "Which scene proves the stakes are real?",
        "What is the last image, and what has changed in it?",
    ];
    BODIES[index % BODIES.len()]
}

/// Render a story mode built around one selection group
pub fn render_selection_view(
    ui: &mut egui::Ui,
    cx: &mut ViewContext<'_>,
    kind: GroupKind,
    heading: &str,
    list_title: &str,
) {
    ui.heading(RichText::new(heading).size(24.0).strong());
    ui.add_space(16.0);

    let Some(group) = cx.coordinator.group(kind) else {
        return;
    };

    ui.horizontal(|ui| {
        egui::Frame::none()
            .fill(ThemeColors::BG_MEDIUM)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(220.0);
                ui.set_min_height(320.0);
                ui.label(
                    RichText::new(list_title)
                        .size(12.0)
                        .color(ThemeColors::TEXT_MUTED),
                );
                ui.add_space(8.0);

                for item in group.members() {
                    let element = ElementRef::Item(kind, item.clone());
                    let marked = cx.surface.has_marker(&element, kind.marker());
                    if ui.selectable_label(marked, item.as_str()).clicked() {
                        cx.outbox.push(InputEvent::ItemClicked {
                            group: kind,
                            item: item.clone(),
                        });
                    }
                }
            });

        ui.add_space(16.0);

        ui.vertical(|ui| match group.selected() {
            Some(item) => {
                ui.label(RichText::new(item).size(18.0).strong());
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Review notes for this item appear here.")
                        .color(ThemeColors::TEXT_SECONDARY),
                );
            }
            None => {
                ui.label(
                    RichText::new(format!("Select an item from {}", list_title.to_lowercase()))
                        .color(ThemeColors::TEXT_MUTED),
                );
            }
        });
    });
}
