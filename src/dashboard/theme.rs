//! Studio theme and styling
//!
//! Muted editorial palette for the review studio.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Editorial dark palette
pub struct ThemeColors;

impl ThemeColors {
    // Surfaces
    pub const BG_DARK: Color32 = Color32::from_rgb(22, 24, 29);
    pub const BG_MEDIUM: Color32 = Color32::from_rgb(31, 34, 41);
    pub const BG_LIGHT: Color32 = Color32::from_rgb(42, 46, 55);
    pub const BG_HOVER: Color32 = Color32::from_rgb(52, 57, 68);

    // Accents
    pub const ACCENT: Color32 = Color32::from_rgb(226, 164, 82);
    pub const ACCENT_SOFT: Color32 = Color32::from_rgb(120, 170, 150);

    // Text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 233, 226);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(168, 164, 156);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(112, 110, 105);

    // Lines
    pub const BORDER: Color32 = Color32::from_rgb(58, 62, 72);
}

/// Apply the studio theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = Visuals::dark();

    visuals.window_fill = ThemeColors::BG_MEDIUM;
    visuals.panel_fill = ThemeColors::BG_DARK;
    visuals.faint_bg_color = ThemeColors::BG_LIGHT;
    visuals.extreme_bg_color = ThemeColors::BG_DARK;

    visuals.widgets.inactive.bg_fill = ThemeColors::BG_LIGHT;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = color_with_alpha(ThemeColors::ACCENT, 70);
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::ACCENT);
    visuals.window_stroke = Stroke::new(1.0, ThemeColors::BORDER);

    style.visuals = visuals;

    // Cards and rows handle their own clicks
    style.interaction.selectable_labels = false;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

/// Helper to create a color with modified alpha
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
