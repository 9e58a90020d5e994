//! Error types for the Tabby editor library.

use thiserror::Error;

use crate::panel::PanelId;

/// Errors raised when mutating a splitter's panel sequence or sizes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("index {index} out of range for {len} panels")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a panel titled '{0}' is already in the splitter")]
    DuplicateTitle(String),

    #[error("no panel with id {0:?} in the splitter")]
    UnknownPanel(PanelId),

    #[error("expected {expected} relative sizes, got {actual}")]
    SizeCountMismatch { expected: usize, actual: usize },

    #[error("relative sizes must be finite, non-negative and have a positive total")]
    InvalidSizes,
}

/// Errors raised while loading an [`EditorConfig`](crate::config::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed editor config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid editor config: {0}")]
    Invalid(String),
}
