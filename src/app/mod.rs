//! Application-level modules for the Tabby editor.
//!
//! This module contains the centralized state and the coordinator that
//! applies UI interactions to it.

mod app_state;
mod workspace_coordinator;

pub use app_state::AppState;
pub use workspace_coordinator::WorkspaceCoordinator;
