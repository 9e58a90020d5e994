//! Workspace-level coordination.
//!
//! Applies the interactions reported by the panel views: drops reorder the
//! splitter, action selections route through the registry. Also owns the
//! end-of-gesture bookkeeping that must run however a gesture finishes.

use tabby::{
    ActionId, DragParticipant, DragTransfer, DropOutcome, GestureEnd, PanelId, ResizeParticipant,
};
use tracing::debug;

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Coordinates workspace mutations triggered by UI interactions.
pub struct WorkspaceCoordinator;

impl WorkspaceCoordinator {
    /// Applies one interaction. Returns true if a drop reordered the panels.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) -> bool {
        match interaction {
            PanelInteraction::PanelDropped { target, transfer } => {
                Self::apply_drop(state, target, &transfer)
            }
            PanelInteraction::ActionSelected(action) => {
                Self::trigger_action(state, action);
                false
            }
        }
    }

    /// Drops `transfer` onto `target`; only a valid drop changes the order.
    pub fn apply_drop(state: &mut AppState, target: PanelId, transfer: &DragTransfer) -> bool {
        let outcome = state.workspace.drop_onto(target, transfer);
        debug!(?outcome, "drop handled");
        matches!(outcome, DropOutcome::Swapped { .. })
    }

    pub fn trigger_action(state: &mut AppState, action: ActionId) {
        if !state.actions.trigger(action) {
            debug!(%action, "ignored unhandled action");
        }
    }

    /// Runs on primary release: ends every panel gesture and releases every
    /// handle, wherever the pointer is.
    pub fn finish_gestures(state: &mut AppState, dropped: bool) {
        for panel in state.workspace.panels_mut() {
            if let GestureEnd::Cancelled(transfer) = panel.release(dropped) {
                debug!(payload = ?transfer.text(), "drag ended without a swap");
            }
        }
        for index in 0..state.workspace.handles().len() {
            if let Some(handle) = state.workspace.handle_mut(index) {
                handle.release(egui::PointerButton::Primary);
            }
        }
    }

    /// True when a panel is still dragging but egui no longer holds its
    /// payload outside a release frame. egui consumes Escape and drops the
    /// payload itself during a drag, so this is how Escape reaches the panels.
    pub fn payload_lost(state: &AppState, ctx: &egui::Context) -> bool {
        let released = ctx.input(|i| i.pointer.primary_released());
        !released
            && !egui::DragAndDrop::has_any_payload(ctx)
            && state.workspace.panels().iter().any(|panel| panel.is_dragging())
    }

    /// Aborts in-flight gestures after focus loss or Escape.
    pub fn interrupt(state: &mut AppState, ctx: &egui::Context) {
        if state.workspace.cancel_interactions() {
            debug!("workspace interaction interrupted");
            egui::DragAndDrop::clear_payload(ctx);
        }
    }
}
