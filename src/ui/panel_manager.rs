//! Panel orchestration and layout management.
//!
//! Coordinates the window's regions (menu bar, timeline strip, workspace)
//! and forwards their interactions to the application coordinator.

use eframe::egui;
use tabby::{ActionId, DragTransfer, PanelId};

use crate::app::AppState;
use crate::ui::{menu_bar, timeline_strip, workspace_view};

/// Result of panel interactions that need to be handled by the coordinator.
#[derive(Debug)]
pub enum PanelInteraction {
    /// A drag payload was released over a panel
    PanelDropped {
        target: PanelId,
        transfer: DragTransfer,
    },
    /// A menu entry or content button was selected
    ActionSelected(ActionId),
}

/// Manages the layout and rendering of all window regions.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole window for one frame.
    ///
    /// Called from the `eframe::App::update()` implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let colors = state.theme.colors.clone();

        // Menu bar at the top
        let menu_frame = egui::Frame::NONE
            .fill(colors.surface)
            .stroke(egui::Stroke::new(state.theme.metrics.border_width, colors.border))
            .inner_margin(egui::Margin::symmetric(8, 4));
        egui::TopBottomPanel::top("menu_bar").frame(menu_frame).show(ctx, |ui| {
            if let Some(action) = menu_bar::render_menu_bar(ui, &state.menu) {
                interaction = Some(PanelInteraction::ActionSelected(action));
            }
        });

        // Timeline strip at the bottom
        let timeline_frame = egui::Frame::NONE
            .fill(colors.window_background)
            .inner_margin(egui::Margin {
                left: 9,
                right: 9,
                top: 10,
                bottom: 9,
            });
        egui::TopBottomPanel::bottom("timeline")
            .exact_height(state.config.timeline_height)
            .resizable(false)
            .frame(timeline_frame)
            .show(ctx, |ui| {
                timeline_strip::render_timeline_strip(ui, &state.theme);
            });

        // Workspace fills the rest
        let workspace_frame = egui::Frame::NONE
            .fill(colors.window_background)
            .inner_margin(egui::Margin::same(9));
        egui::CentralPanel::default()
            .frame(workspace_frame)
            .show(ctx, |ui| {
                if let Some(workspace_interaction) = workspace_view::render_workspace(ui, state) {
                    interaction = Some(workspace_interaction);
                }
            });

        interaction
    }
}
