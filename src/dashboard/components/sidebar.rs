//! Sidebar navigation component

use egui::{Align2, FontId, RichText, Rounding, Sense, Stroke, Vec2};

use crate::coordinator::{GroupKind, UiCoordinator, ViewId};
use crate::dashboard::surface::RenderSurface;
use crate::dashboard::theme::{color_with_alpha, ThemeColors};
use crate::shared::{ElementRef, InputEvent};

const ROW_HEIGHT: f32 = 34.0;
const BADGE_RADIUS: f32 = 11.0;

/// What a nav row shows, read from the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct NavState {
    /// The row's nav control carries the active marker
    active: bool,
    /// The row's mode tab is the marked one
    current_mode: bool,
}

/// Render one navigation control per registered view
pub fn render_sidebar(
    ui: &mut egui::Ui,
    coordinator: &UiCoordinator,
    surface: &RenderSurface,
    outbox: &mut Vec<InputEvent>,
) {
    ui.vertical(|ui| {
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(RichText::new("StoryReview").size(18.0).color(ThemeColors::ACCENT).strong());
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(RichText::new("Studio").size(11.0).color(ThemeColors::TEXT_MUTED));
        });

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(12.0);

        for view in coordinator.views() {
            let state = nav_state(coordinator, surface, view);
            if nav_row(ui, view, state) {
                outbox.push(InputEvent::NavClicked {
                    view: view.to_string(),
                });
            }
            ui.add_space(2.0);
        }
    });
}

fn nav_state(coordinator: &UiCoordinator, surface: &RenderSurface, view: &ViewId) -> NavState {
    let current_mode = coordinator
        .group(GroupKind::ModeTabs)
        .and_then(|tabs| {
            tabs.members()
                .iter()
                .find(|label| label.to_lowercase() == view.as_str())
        })
        .map(|label| surface.is_active(&ElementRef::Item(GroupKind::ModeTabs, label.clone())))
        .unwrap_or(false);

    NavState {
        active: surface.is_active(&ElementRef::NavControl(view.clone())),
        current_mode,
    }
}

/// Display title for a view id: "dashboard" -> "Dashboard"
pub fn view_title(view: &ViewId) -> String {
    let mut chars = view.as_str().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One nav row: initial badge, title, and a dot on the last-used story mode.
/// Returns true when clicked.
fn nav_row(ui: &mut egui::Ui, view: &ViewId, state: NavState) -> bool {
    let width = ui.available_width() - 12.0;
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, ROW_HEIGHT), Sense::click());
    if !ui.is_rect_visible(rect) {
        return response.clicked();
    }

    let painter = ui.painter();
    let row = rect.shrink2(Vec2::new(6.0, 1.0));

    if state.active {
        painter.rect(
            row,
            Rounding::same(ROW_HEIGHT / 2.0),
            color_with_alpha(ThemeColors::ACCENT, 36),
            Stroke::new(1.0, color_with_alpha(ThemeColors::ACCENT, 120)),
        );
    } else if response.hovered() {
        painter.rect_filled(row, Rounding::same(ROW_HEIGHT / 2.0), ThemeColors::BG_HOVER);
    }

    let badge_center = row.left_center() + Vec2::new(BADGE_RADIUS + 6.0, 0.0);
    let (badge_fill, badge_text) = if state.active {
        (ThemeColors::ACCENT, ThemeColors::BG_DARK)
    } else {
        (ThemeColors::BG_LIGHT, ThemeColors::TEXT_SECONDARY)
    };
    painter.circle_filled(badge_center, BADGE_RADIUS, badge_fill);
    painter.text(
        badge_center,
        Align2::CENTER_CENTER,
        view_title(view).chars().next().unwrap_or(' '),
        FontId::proportional(12.0),
        badge_text,
    );

    let text_color = if state.active {
        ThemeColors::TEXT_PRIMARY
    } else {
        ThemeColors::TEXT_SECONDARY
    };
    painter.text(
        badge_center + Vec2::new(BADGE_RADIUS + 10.0, 0.0),
        Align2::LEFT_CENTER,
        view_title(view),
        FontId::proportional(14.0),
        text_color,
    );

    if state.current_mode {
        painter.circle_filled(
            row.right_center() - Vec2::new(14.0, 0.0),
            3.0,
            ThemeColors::ACCENT_SOFT,
        );
    }

    response.clicked()
}
