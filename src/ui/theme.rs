use egui::{FontId, Rounding, Stroke, Visuals};

use crate::model::style::ChartTheme;

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const SIDE_PANEL_WIDTH: f32 = 260.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_heading() -> FontId {
    FontId::proportional(15.0)
}

pub fn font_label() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(10.5)
}

// ── Apply visuals ────────────────────────────────────────────────────────────

/// Style the application chrome to match the selected chart theme, so the
/// panels around the figure don't clash with its background.
pub fn apply_theme(ctx: &egui::Context, theme: ChartTheme) {
    let mut visuals = match theme {
        ChartTheme::Light => Visuals::light(),
        ChartTheme::Dark => Visuals::dark(),
    };

    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);
    visuals.widgets.active.rounding = Rounding::same(4.0);
    visuals.window_rounding = Rounding::same(8.0);
    visuals.selection.stroke = Stroke::new(1.0, visuals.hyperlink_color);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
