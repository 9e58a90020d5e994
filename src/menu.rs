//! Menu bar declarations and action routing.
//!
//! Every menu entry and toolbar button is a named [`ActionId`]. Selecting one
//! routes through an [`ActionRegistry`]; with no callback attached the
//! selection is a logged no-op.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

/// Named actions the editor exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    NewProject,
    OpenProject,
    SaveProject,
    ExportVideo,
    Exit,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    About,
    ImportMedia,
    PlayPause,
}

impl ActionId {
    pub fn label(self) -> &'static str {
        match self {
            ActionId::NewProject => "New Project",
            ActionId::OpenProject => "Open Project",
            ActionId::SaveProject => "Save Project",
            ActionId::ExportVideo => "Export Video",
            ActionId::Exit => "Exit",
            ActionId::Undo => "Undo",
            ActionId::Redo => "Redo",
            ActionId::Cut => "Cut",
            ActionId::Copy => "Copy",
            ActionId::Paste => "Paste",
            ActionId::About => "About",
            ActionId::ImportMedia => "Import Media",
            ActionId::PlayPause => "Play/Pause",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One top-level menu and its entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub title: &'static str,
    pub actions: Vec<ActionId>,
}

/// The window's menu bar.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBar {
    menus: Vec<Menu>,
}

impl MenuBar {
    /// File / Edit / Help as shipped with the editor.
    pub fn standard() -> Self {
        Self {
            menus: vec![
                Menu {
                    title: "File",
                    actions: vec![
                        ActionId::NewProject,
                        ActionId::OpenProject,
                        ActionId::SaveProject,
                        ActionId::ExportVideo,
                        ActionId::Exit,
                    ],
                },
                Menu {
                    title: "Edit",
                    actions: vec![
                        ActionId::Undo,
                        ActionId::Redo,
                        ActionId::Cut,
                        ActionId::Copy,
                        ActionId::Paste,
                    ],
                },
                Menu {
                    title: "Help",
                    actions: vec![ActionId::About],
                },
            ],
        }
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Looks up an entry by its visible label.
    pub fn find(&self, label: &str) -> Option<ActionId> {
        self.menus
            .iter()
            .flat_map(|m| m.actions.iter().copied())
            .find(|a| a.label() == label)
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::standard()
    }
}

type ActionCallback = Box<dyn FnMut()>;

/// Callbacks attached to named actions.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<ActionId, ActionCallback>,
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("handled", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `callback` to `action`, replacing any previous one.
    pub fn attach(&mut self, action: ActionId, callback: impl FnMut() + 'static) {
        self.handlers.insert(action, Box::new(callback));
    }

    pub fn detach(&mut self, action: ActionId) -> bool {
        self.handlers.remove(&action).is_some()
    }

    pub fn is_handled(&self, action: ActionId) -> bool {
        self.handlers.contains_key(&action)
    }

    /// Runs the callback for `action`. Returns false when none is attached.
    pub fn trigger(&mut self, action: ActionId) -> bool {
        match self.handlers.get_mut(&action) {
            Some(callback) => {
                callback();
                true
            }
            None => {
                debug!(%action, "action has no handler");
                false
            }
        }
    }
}
