pub mod config;
pub mod drag;
pub mod error;
pub mod handle;
pub mod menu;
pub mod panel;
pub mod splitter;
pub mod theme;
pub mod traits;

// Export capability traits
pub use traits::{DragParticipant, ResizeParticipant};

// Export workspace model
pub use drag::{DragGesture, DragTransfer, GestureEnd, GesturePhase};
pub use handle::{HighlightHandle, Orientation, PlainHandle};
pub use panel::{Panel, PanelContent, PanelId};
pub use splitter::{DropOutcome, Splitter, SplitterLayout};

// Export menu and action routing
pub use menu::{ActionId, ActionRegistry, Menu, MenuBar};

// Export configuration, errors and theme support
pub use config::EditorConfig;
pub use error::{ConfigError, LayoutError};
pub use theme::{hex_to_color32, translucent, Theme, ThemeColors, ThemeMetrics};
