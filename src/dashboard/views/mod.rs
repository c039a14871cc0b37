//! Studio views
//!
//! Each renderer reads markers from the render surface and queues input
//! events in the outbox. Nothing here decides state.

pub mod dashboard;
pub mod drawer;
pub mod settings;
pub mod story;

pub use dashboard::render_dashboard_view;
pub use drawer::render_drawer;
pub use settings::render_settings_view;
pub use story::{render_mode_tabs, render_selection_view, render_seed_view};

use egui::RichText;

use crate::coordinator::{GroupKind, UiCoordinator, ViewId};
use crate::dashboard::components::sidebar::view_title;
use crate::dashboard::surface::RenderSurface;
use crate::dashboard::theme::ThemeColors;
use crate::shared::InputEvent;

/// Everything a view renderer may touch during one frame
pub struct ViewContext<'a> {
    /// Read-only access to the layout the coordinator manages
    pub coordinator: &'a UiCoordinator,
    pub surface: &'a mut RenderSurface,
    pub outbox: &'a mut Vec<InputEvent>,
    /// Text of the dashboard search field (presentation only)
    pub search_query: &'a mut String,
}

/// Render whichever view container the surface marks visible
pub fn render_visible_view(ui: &mut egui::Ui, cx: &mut ViewContext<'_>) {
    let Some(view) = cx.surface.visible_view().cloned() else {
        return;
    };

    if &view == cx.coordinator.dashboard_view() {
        render_dashboard_view(ui, cx);
        return;
    }

    if is_story_mode(cx.coordinator, &view) {
        render_mode_tabs(ui, cx);
        ui.add_space(16.0);
    }

    match view.as_str() {
        "seed" => render_seed_view(ui, cx),
        "draft" => render_selection_view(ui, cx, GroupKind::Scenes, "Draft", "Scenes"),
        "shape" => render_selection_view(ui, cx, GroupKind::Bundles, "Shape", "Bundles"),
        "test" => render_selection_view(ui, cx, GroupKind::Sections, "Test", "Sections"),
        "settings" => render_settings_view(ui, cx),
        _ => render_placeholder(ui, &view),
    }
}

/// Whether `view` is reachable from a mode tab
fn is_story_mode(coordinator: &UiCoordinator, view: &ViewId) -> bool {
    coordinator
        .group(GroupKind::ModeTabs)
        .map(|tabs| {
            tabs.members()
                .iter()
                .any(|label| label.to_lowercase() == view.as_str())
        })
        .unwrap_or(false)
}

fn render_placeholder(ui: &mut egui::Ui, view: &ViewId) {
    ui.heading(RichText::new(view_title(view)).size(24.0).strong());
    ui.add_space(8.0);
    ui.label(
        RichText::new("Nothing to show here yet")
            .size(14.0)
            .color(ThemeColors::TEXT_MUTED),
    );
}
