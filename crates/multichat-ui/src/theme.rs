//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};
use multichat_types::persona::ColorTheme;

pub const BG_PRIMARY: Color32 = Color32::from_rgb(24, 24, 27);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(39, 39, 42);
pub const BG_SURFACE: Color32 = Color32::from_rgb(52, 52, 56);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(228, 228, 231);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(161, 161, 170);
pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const ERROR_BG: Color32 = Color32::from_rgb(50, 20, 20);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(79, 70, 229);
pub const ASSISTANT_BUBBLE: Color32 = BG_SURFACE;

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Gradient endpoints for a persona colour token.
pub fn persona_colors(theme: ColorTheme) -> (Color32, Color32) {
    match theme {
        ColorTheme::BluePurple => (Color32::from_rgb(59, 130, 246), Color32::from_rgb(147, 51, 234)),
        ColorTheme::GreenTeal => (Color32::from_rgb(34, 197, 94), Color32::from_rgb(13, 148, 136)),
        ColorTheme::PinkRose => (Color32::from_rgb(236, 72, 153), Color32::from_rgb(225, 29, 72)),
        ColorTheme::OrangeRed => (Color32::from_rgb(249, 115, 22), Color32::from_rgb(220, 38, 38)),
    }
}

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
