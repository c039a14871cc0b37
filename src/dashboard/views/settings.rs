//! Settings view - tabbed preferences

use egui::RichText;

use super::ViewContext;
use crate::coordinator::GroupKind;
use crate::dashboard::theme::ThemeColors;
use crate::shared::{ElementRef, InputEvent};

/// Render the settings view
pub fn render_settings_view(ui: &mut egui::Ui, cx: &mut ViewContext<'_>) {
    ui.heading(RichText::new("Settings").size(24.0).strong());
    ui.add_space(8.0);
    ui.label(
        RichText::new("Configure review behavior and preferences")
            .size(14.0)
            .color(ThemeColors::TEXT_SECONDARY),
    );

    ui.add_space(24.0);

    let Some(tabs) = cx.coordinator.group(GroupKind::SettingsTabs) else {
        return;
    };

    ui.horizontal(|ui| {
        for tab in tabs.members() {
            let element = ElementRef::Item(GroupKind::SettingsTabs, tab.clone());
            if ui.selectable_label(cx.surface.is_active(&element), tab.as_str()).clicked() {
                cx.outbox.push(InputEvent::ItemClicked {
                    group: GroupKind::SettingsTabs,
                    item: tab.clone(),
                });
            }
        }
    });

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(16.0);

    let shortcuts = cx.coordinator.shortcuts();
    match tabs.selected() {
        Some(tab) => {
            ui.label(RichText::new(tab).size(18.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Search: {}    Close drawer: {}",
                    shortcuts.focus_search, shortcuts.close_drawer
                ))
                .color(ThemeColors::TEXT_SECONDARY),
            );
        }
        None => {
            ui.label(RichText::new("Pick a tab").color(ThemeColors::TEXT_MUTED));
        }
    }
}
