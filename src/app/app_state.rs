//! Centralized application state for the Tabby editor.
//!
//! The state is composed of the library's focused components: the workspace
//! splitter, the declared menu bar, the action registry and the immutable
//! theme/config pair built once at startup.

use anyhow::{Context, Result};
use tabby::{
    ActionRegistry, EditorConfig, HighlightHandle, MenuBar, Orientation, Panel, Splitter, Theme,
};
use tracing::info;

/// Main application state.
pub struct AppState {
    /// Options / Media Library / Video Player, left to right
    pub workspace: Splitter<HighlightHandle>,

    /// File / Edit / Help declarations
    pub menu: MenuBar,

    /// Callbacks for menu entries and toolbar buttons (none attached)
    pub actions: ActionRegistry,

    /// Immutable palette passed to every render function
    pub theme: Theme,

    /// Window and interaction metrics
    pub config: EditorConfig,
}

impl AppState {
    /// Builds the startup workspace: three panels in fixed order with the
    /// configured initial proportions.
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate().context("editor config rejected")?;

        let mut workspace: Splitter<HighlightHandle> = Splitter::new(Orientation::Horizontal);
        for panel in [Panel::options(), Panel::media_library(), Panel::video_player()] {
            workspace
                .append(panel)
                .context("failed to populate the workspace")?;
        }
        workspace
            .set_relative_sizes(&config.initial_sizes)
            .context("initial panel sizes do not match the workspace")?;

        info!(
            panels = ?workspace.titles(),
            sizes = ?workspace.relative_sizes(),
            "workspace ready"
        );

        Ok(Self {
            workspace,
            menu: MenuBar::standard(),
            actions: ActionRegistry::new(),
            theme: Theme::tabby_dark(),
            config,
        })
    }
}
