//! Editor configuration.
//!
//! Window presentation, initial panel proportions and interaction metrics.
//! The application always starts from [`EditorConfig::default`]; the JSON
//! loader exists for embedders that want to override the metrics.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Static configuration for the editor window and its workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Title of the native window
    pub window_title: String,
    /// Present the window full-screen
    pub fullscreen: bool,
    /// Initial weights for [Options, Media Library, Video Player]
    pub initial_sizes: Vec<f32>,
    /// Manhattan distance the pointer must travel before a press becomes a drag
    pub drag_threshold: f32,
    /// Thickness of the strip between adjacent panels
    pub handle_width: f32,
    /// Fixed height of a panel's title header
    pub header_height: f32,
    /// Height of the timeline strip below the workspace
    pub timeline_height: f32,
    /// Smallest extent a panel may be resized to
    pub min_panel_extent: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_title: "Tabby Editor".to_string(),
            fullscreen: true,
            initial_sizes: vec![100.0, 300.0, 600.0],
            drag_threshold: 10.0,
            handle_width: 5.0,
            header_height: 40.0,
            timeline_height: 160.0,
            min_panel_extent: 48.0,
        }
    }
}

impl EditorConfig {
    /// Parses a JSON document; missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every metric is usable for layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let metrics = [
            ("drag_threshold", self.drag_threshold),
            ("handle_width", self.handle_width),
            ("header_height", self.header_height),
            ("timeline_height", self.timeline_height),
            ("min_panel_extent", self.min_panel_extent),
        ];
        for (name, value) in metrics {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be a non-negative number, got {value}")));
            }
        }

        let total: f32 = self.initial_sizes.iter().sum();
        if self.initial_sizes.iter().any(|s| !s.is_finite() || *s < 0.0) || total <= 0.0 {
            return Err(ConfigError::Invalid(
                "initial_sizes must be non-negative with a positive total".to_string(),
            ));
        }

        Ok(())
    }
}
