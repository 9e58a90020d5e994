//! UI rendering subsystem
//!
//! This module contains all egui rendering for the Tabby editor:
//! - Menu bar (declared File / Edit / Help entries)
//! - Workspace (splitter with draggable panels and resize handles)
//! - Panel view (header, drag source, drop target)
//! - Panel content (options list, media library, video player)
//! - Timeline strip (placeholder below the workspace)
//! - Panel manager (region orchestration)

pub mod menu_bar;
pub mod panel_content;
pub mod panel_manager;
pub mod panel_view;
pub mod timeline_strip;
pub mod workspace_view;
