//! Panel UI rendering and drag-and-drop wiring
//!
//! Draws one panel (header + content) inside the rectangle the splitter
//! assigned to it and feeds pointer input into the panel's drag gesture:
//! - press on the header arms the gesture
//! - moving past the drag threshold publishes a [`DragTransfer`] payload
//! - releasing a payload over the panel reports a drop

use eframe::egui;
use egui::{DragAndDrop, LayerId, Order, PointerButton, Rect, RichText, Sense, Stroke, StrokeKind};
use tabby::{translucent, ActionId, DragParticipant, DragTransfer, EditorConfig, Panel, Theme};

use crate::ui::panel_content;

/// Alpha of the drag overlay fill
const OVERLAY_ALPHA: u8 = 40;

/// Result of user interaction with a panel
pub enum PanelViewInteraction {
    /// A payload was released over this panel
    Dropped(DragTransfer),
    /// A content button requested an action
    Action(ActionId),
}

/// Area of the header the title text is laid out in.
fn title_rect(header_rect: Rect, theme: &Theme) -> Rect {
    let metrics = &theme.metrics;
    header_rect.shrink2(egui::vec2(metrics.title_margin_x, metrics.title_margin_y))
}

/// Renders `panel` inside `rect`.
pub fn render_panel(
    ui: &mut egui::Ui,
    panel: &mut Panel,
    rect: Rect,
    theme: &Theme,
    config: &EditorConfig,
) -> Option<PanelViewInteraction> {
    let mut interaction = None;
    let id = panel.id().egui_id();
    let colors = &theme.colors;
    let metrics = &theme.metrics;

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, metrics.panel_radius, colors.panel_background);
    painter.rect_stroke(
        rect,
        metrics.panel_radius,
        Stroke::new(metrics.border_width, colors.border),
        StrokeKind::Inside,
    );

    let header_rect = Rect::from_min_size(
        rect.min,
        egui::vec2(rect.width(), config.header_height.min(rect.height())),
    )
    .shrink(1.0);
    let content_rect = Rect::from_min_max(egui::pos2(rect.min.x, header_rect.max.y), rect.max);

    // Whole panel is the drop target; registered first so content widgets stay on top
    let target = ui.interact(rect, id.with("drop_target"), Sense::hover());
    let header = ui.interact(header_rect, id.with("header"), Sense::drag());

    // Header
    painter.rect_filled(header_rect, metrics.title_radius, colors.panel_background);
    painter.rect_stroke(
        header_rect,
        metrics.title_radius,
        Stroke::new(metrics.border_width, colors.border),
        StrokeKind::Inside,
    );
    let title_rect = title_rect(header_rect, theme);
    painter.with_clip_rect(title_rect).text(
        title_rect.left_center(),
        egui::Align2::LEFT_CENTER,
        panel.title(),
        egui::FontId::proportional(14.0),
        colors.panel_title,
    );

    // Drag source
    let (pressed, primary_down, pointer) = ui.input(|i| {
        (i.pointer.primary_pressed(), i.pointer.primary_down(), i.pointer.interact_pos())
    });
    if pressed && header.contains_pointer() {
        if let Some(pos) = pointer {
            panel.press(PointerButton::Primary, pos);
        }
    }
    if let Some(pos) = pointer {
        if let Some(transfer) = panel.pointer_moved(primary_down, pos, config.drag_threshold) {
            DragAndDrop::set_payload(ui.ctx(), transfer);
        }
    }
    if header.hovered() && !panel.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    // Drop target
    if let Some(incoming) = target.dnd_hover_payload::<DragTransfer>() {
        if panel.accepts(&incoming) && !panel.is_source_of(&incoming) {
            painter.rect_stroke(
                rect,
                metrics.panel_radius,
                Stroke::new(metrics.outline_width, colors.highlight),
                StrokeKind::Inside,
            );
        }
    }
    if let Some(incoming) = target.dnd_release_payload::<DragTransfer>() {
        interaction = Some(PanelViewInteraction::Dropped((*incoming).clone()));
    }

    // Content
    let inner = content_rect.shrink(metrics.content_margin);
    if inner.is_positive() {
        let action = ui
            .scope_builder(egui::UiBuilder::new().max_rect(inner).id_salt(id), |ui| {
                ui.set_clip_rect(inner);
                panel_content::render_content(ui, panel.content_mut(), theme)
            })
            .inner;
        if let Some(action) = action {
            interaction = Some(PanelViewInteraction::Action(action));
        }
    }

    // Translucent outline following the source panel while its drag is in flight
    if panel.gesture().overlay_visible() {
        let overlay = ui.ctx().layer_painter(LayerId::new(Order::Foreground, id.with("drag_overlay")));
        overlay.rect_filled(rect, metrics.panel_radius, translucent(colors.drag_outline, OVERLAY_ALPHA));
        overlay.rect_stroke(
            rect,
            metrics.panel_radius,
            Stroke::new(metrics.border_width, colors.drag_outline),
            StrokeKind::Inside,
        );
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    }

    interaction
}
