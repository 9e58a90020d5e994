//! Tabby Editor GUI Application
//!
//! The visual shell of a video editor built with egui: a full-screen window
//! with a horizontal workspace of draggable, swappable panels (Options,
//! Media Library, Video Player) above a timeline strip, and a menu bar whose
//! entries are declared but not yet wired to any behaviour.
//!
//! The application is split into:
//! - `app/` - Application state and interaction coordination
//! - `ui/` - Region, panel and splitter rendering

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{anyhow, Context};
use eframe::egui;
use tabby::EditorConfig;
use tracing::info;

mod app;
mod ui;

use app::{AppState, WorkspaceCoordinator};
use ui::panel_manager::PanelManager;

/// Application entry point: builds the workspace and runs the event loop.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = EditorConfig::default();
    let state = AppState::new(config.clone()).context("failed to build the editor workspace")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_fullscreen(config.fullscreen)
            .with_title(&config.window_title),
        ..Default::default()
    };

    info!(title = %config.window_title, "starting editor");
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |cc| Ok(Box::new(TabbyEditorApp::new(cc, state)))),
    )
    .map_err(|e| anyhow!("failed to open the editor window: {e}"))
}

/// The Tabby editor application.
///
/// Rendering is delegated to `PanelManager`; state changes go through
/// `WorkspaceCoordinator`.
struct TabbyEditorApp {
    state: AppState,
}

impl TabbyEditorApp {
    /// Installs the theme once; it never changes afterwards.
    fn new(cc: &eframe::CreationContext, state: AppState) -> Self {
        cc.egui_ctx.set_visuals(state.theme.visuals());
        Self { state }
    }
}

impl eframe::App for TabbyEditorApp {
    /// Main update loop.
    ///
    /// 1. Abort gestures on focus loss or Escape (egui reports the latter
    ///    as a lost drag payload)
    /// 2. Render all regions via PanelManager
    /// 3. Apply the reported interaction
    /// 4. Close out gestures on primary release
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (focused, escape) = ctx.input(|i| (i.focused, i.key_pressed(egui::Key::Escape)));
        if !focused || escape || WorkspaceCoordinator::payload_lost(&self.state, ctx) {
            WorkspaceCoordinator::interrupt(&mut self.state, ctx);
        }

        let dropped = PanelManager::render_all_panels(ctx, &mut self.state)
            .map(|interaction| WorkspaceCoordinator::handle_interaction(&mut self.state, interaction))
            .unwrap_or(false);

        if ctx.input(|i| i.pointer.primary_released()) {
            WorkspaceCoordinator::finish_gestures(&mut self.state, dropped);
        }
    }
}
