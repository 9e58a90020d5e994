//! Workspace splitter UI rendering
//!
//! Lays the splitter's panels and handles out across the available space,
//! turns handle drags into proportional resizes and collects panel
//! interactions.

use eframe::egui;
use egui::{CursorIcon, PointerButton, Sense};
use tabby::{Orientation, ResizeParticipant};

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::panel_view::{self, PanelViewInteraction};

/// Renders the workspace splitter into the remaining space of `ui`.
pub fn render_workspace(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;

    let rect = ui.available_rect_before_wrap();
    ui.allocate_rect(rect, Sense::hover());

    let handle_width = state.config.handle_width;
    let orientation = state.workspace.orientation();
    let total_extent = orientation.main_extent(rect);
    let layout = state.workspace.layout(rect, handle_width);

    let primary_pressed = ui.input(|i| i.pointer.primary_pressed());
    let resize_cursor = match orientation {
        Orientation::Horizontal => CursorIcon::ResizeHorizontal,
        Orientation::Vertical => CursorIcon::ResizeVertical,
    };

    // Handles
    for (index, handle_rect) in layout.handles.iter().enumerate() {
        let response = ui.interact(*handle_rect, ui.id().with(("splitter_handle", index)), Sense::drag());

        if primary_pressed && response.contains_pointer() {
            if let Some(handle) = state.workspace.handle_mut(index) {
                handle.press(PointerButton::Primary);
            }
        }

        let active = state.workspace.handles()[index].is_active();
        if active && response.dragged() {
            let delta = match orientation {
                Orientation::Horizontal => response.drag_delta().x,
                Orientation::Vertical => response.drag_delta().y,
            };
            let resized = state.workspace.drag_handle(
                index,
                delta,
                total_extent,
                handle_width,
                state.config.min_panel_extent,
            );
            if resized.is_ok() {
                if let Some(handle) = state.workspace.handle_mut(index) {
                    if handle.geometry_changed() {
                        ui.ctx().request_repaint();
                    }
                }
            }
        }

        if response.hovered() || active {
            ui.ctx().set_cursor_icon(resize_cursor);
        }
        state.workspace.handles()[index].paint(ui.painter(), *handle_rect, response.hovered(), &state.theme);
    }

    // Panels
    for (panel, panel_rect) in state.workspace.panels_mut().iter_mut().zip(layout.panels.iter()) {
        let target = panel.id();
        match panel_view::render_panel(ui, panel, *panel_rect, &state.theme, &state.config) {
            Some(PanelViewInteraction::Dropped(transfer)) => {
                interaction = Some(PanelInteraction::PanelDropped { target, transfer });
            }
            Some(PanelViewInteraction::Action(action)) => {
                interaction = Some(PanelInteraction::ActionSelected(action));
            }
            None => {}
        }
    }

    interaction
}
