//! Evidence drawer overlay
//!
//! The backdrop is the overlay container itself. The panel on the right is a
//! descendant, so clicks on it carry a different target identity.

use egui::{Align2, Color32, Order, RichText, Sense};

use crate::dashboard::theme::ThemeColors;
use crate::shared::{ElementId, InputEvent};

const DRAWER_WIDTH: f32 = 380.0;

/// Draw the open drawer and queue its click events
pub fn render_drawer(ctx: &egui::Context, drawer: &ElementId, outbox: &mut Vec<InputEvent>) {
    let screen = ctx.screen_rect();
    let panel = ElementId::new(format!("{}-panel", drawer));

    egui::Area::new(egui::Id::new(drawer.as_str()))
        .order(Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, Color32::from_black_alpha(150));
            if response.clicked() {
                outbox.push(InputEvent::DrawerOverlayClicked {
                    target: drawer.clone(),
                });
            }
        });

    let panel_rect = egui::Rect::from_min_max(
        egui::pos2(screen.max.x - DRAWER_WIDTH, screen.min.y),
        screen.max,
    );

    egui::Area::new(egui::Id::new(panel.as_str()))
        .order(Order::Foreground)
        .fixed_pos(panel_rect.min)
        .show(ctx, |ui| {
            // Registered before the children so the close button stays on top
            let hit = ui.interact(panel_rect, egui::Id::new(panel.as_str()).with("hit"), Sense::click());

            egui::Frame::none()
                .fill(ThemeColors::BG_MEDIUM)
                .inner_margin(20.0)
                .show(ui, |ui| {
                    ui.set_width(DRAWER_WIDTH - 40.0);
                    ui.set_min_height(panel_rect.height() - 40.0);

                    ui.horizontal(|ui| {
                        ui.heading(RichText::new("Evidence").size(20.0).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Close").clicked() {
                                outbox.push(InputEvent::DrawerCloseClicked);
                            }
                        });
                    });

                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    for (source, quote) in [
                        ("Chapter 2", "\"She never once looked back at the light.\""),
                        ("Reader note", "Stakes feel abstract until the storm scene."),
                        ("Rubric: Voice", "Consistent first-person register."),
                    ] {
                        ui.label(RichText::new(source).size(12.0).color(ThemeColors::TEXT_MUTED));
                        ui.label(RichText::new(quote).color(ThemeColors::TEXT_PRIMARY));
                        ui.add_space(12.0);
                    }

                    ui.painter().text(
                        ui.max_rect().left_bottom(),
                        Align2::LEFT_BOTTOM,
                        "Esc or click outside to close",
                        egui::FontId::proportional(11.0),
                        ThemeColors::TEXT_MUTED,
                    );
                });

            if hit.clicked() {
                outbox.push(InputEvent::DrawerOverlayClicked { target: panel.clone() });
            }
        });
}
