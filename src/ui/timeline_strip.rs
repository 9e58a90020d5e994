//! Timeline strip UI rendering
//!
//! An empty bordered strip below the workspace. There is no timeline model
//! behind it yet.

use eframe::egui;
use egui::RichText;
use tabby::Theme;

/// Renders the timeline placeholder.
pub fn render_timeline_strip(ui: &mut egui::Ui, theme: &Theme) {
    let colors = &theme.colors;

    egui::Frame::NONE
        .fill(colors.window_background)
        .stroke(egui::Stroke::new(theme.metrics.border_width, colors.border))
        .corner_radius(theme.metrics.title_radius)
        .inner_margin(5.0)
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.label(RichText::new("Timeline").strong().color(colors.text));
        });
}
