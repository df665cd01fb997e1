//! Application theme

use egui::{Color32, Context, Rounding, Stroke, Style, Visuals};

/// Apply the light application theme (white panels over a gray canvas,
/// blue accent).
pub fn apply_theme(ctx: &Context) {
    let mut style = Style::default();
    let mut visuals = Visuals::light();

    let bg_color = Color32::from_rgb(249, 250, 251); // Window background
    let panel_bg = Color32::WHITE; // Panel background
    let widget_bg = Color32::from_rgb(243, 244, 246); // Widget background
    let hover_color = Color32::from_rgb(229, 231, 235); // Hover state
    let active_color = Color32::from_rgb(209, 213, 219); // Active/pressed state
    let accent_color = Color32::from_rgb(59, 130, 246); // Blue accent
    let text_color = Color32::from_rgb(17, 24, 39); // Primary text
    let border_color = Color32::from_rgb(229, 231, 235); // Hairline borders

    visuals.window_fill = panel_bg;
    visuals.panel_fill = panel_bg;
    visuals.extreme_bg_color = bg_color;
    visuals.faint_bg_color = widget_bg;

    visuals.widgets.noninteractive.bg_fill = widget_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border_color);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.weak_bg_fill = widget_bg;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, border_color);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.weak_bg_fill = hover_color;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, border_color);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = active_color;
    visuals.widgets.active.weak_bg_fill = active_color;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = accent_color.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color);
    visuals.hyperlink_color = accent_color;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.visuals = visuals;
    ctx.set_style(style);
}
