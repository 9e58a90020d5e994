//! Panel content rendering
//!
//! Draws the region below a panel's header: the options list, the media
//! library with its import button, or the video player placeholder. Buttons
//! report their [`ActionId`] and carry no behaviour of their own.

use eframe::egui;
use egui::{RichText, ScrollArea, Sense};
use tabby::{ActionId, PanelContent, Theme};

/// Minimum height of the video preview surface
const PLAYER_MIN_HEIGHT: f32 = 200.0;
/// Edge length of the media import icon button
const IMPORT_BUTTON_SIZE: f32 = 30.0;

/// Renders a panel's content and returns the action a button requested.
pub fn render_content(ui: &mut egui::Ui, content: &mut PanelContent, theme: &Theme) -> Option<ActionId> {
    match content {
        PanelContent::Options { items, selected } => {
            render_options(ui, items, selected, theme);
            None
        }
        PanelContent::MediaLibrary { media } => render_media_library(ui, media, theme),
        PanelContent::VideoPlayer => render_video_player(ui, theme),
        PanelContent::Empty => None,
    }
}

fn list_frame(theme: &Theme) -> egui::Frame {
    egui::Frame::NONE
        .fill(theme.colors.surface)
        .stroke(egui::Stroke::new(theme.metrics.border_width, theme.colors.border))
        .corner_radius(theme.metrics.title_radius)
        .inner_margin(5.0)
}

fn render_options(ui: &mut egui::Ui, items: &[String], selected: &mut Option<usize>, theme: &Theme) {
    list_frame(theme).show(ui, |ui| {
        ScrollArea::vertical()
            .id_salt("options_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (i, item) in items.iter().enumerate() {
                    let is_selected = *selected == Some(i);
                    let color = if is_selected {
                        theme.colors.highlight
                    } else {
                        theme.colors.text_dim
                    };
                    if ui.selectable_label(is_selected, RichText::new(item).color(color)).clicked() {
                        *selected = Some(i);
                    }
                }
            });
    });
}

fn render_media_library(ui: &mut egui::Ui, media: &[String], theme: &Theme) -> Option<ActionId> {
    let mut action = None;

    let import = ui
        .add_sized(
            [IMPORT_BUTTON_SIZE, IMPORT_BUTTON_SIZE],
            egui::Button::new(RichText::new("⬇").color(theme.colors.button_text))
                .corner_radius(theme.metrics.button_radius),
        )
        .on_hover_text(ActionId::ImportMedia.label());
    if import.clicked() {
        action = Some(ActionId::ImportMedia);
    }

    list_frame(theme).show(ui, |ui| {
        ScrollArea::vertical()
            .id_salt("media_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if media.is_empty() {
                    ui.label(RichText::new("No media imported").color(theme.colors.text_dim));
                }
                for item in media {
                    ui.label(RichText::new(item).color(theme.colors.text_dim));
                }
            });
    });

    action
}

fn render_video_player(ui: &mut egui::Ui, theme: &Theme) -> Option<ActionId> {
    let reserved = ui.spacing().interact_size.y + 2.0 * ui.spacing().item_spacing.y + 16.0;
    let height = (ui.available_height() - reserved).max(PLAYER_MIN_HEIGHT);
    let (surface, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    ui.painter()
        .rect_filled(surface, theme.metrics.title_radius, theme.colors.window_background);

    let play = ui.button(RichText::new(ActionId::PlayPause.label()).color(theme.colors.button_text));
    play.clicked().then_some(ActionId::PlayPause)
}
