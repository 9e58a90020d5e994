//! Theme support for the Tabby editor
//!
//! The editor ships a single dark palette, "Tabby Dark". A [`Theme`] is built
//! once at startup and handed by reference to every render function; nothing
//! mutates it afterwards.
//!
//! # Examples
//!
//! ```
//! use tabby::theme::Theme;
//!
//! let theme = Theme::tabby_dark();
//! println!("Panel background: {:?}", theme.colors.panel_background);
//! ```

use egui::Color32;

/// Named color tokens covering every widget the editor draws
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Backgrounds
    pub window_background: Color32,
    pub panel_background: Color32,
    pub surface: Color32,

    // Foregrounds
    pub text: Color32,
    pub text_dim: Color32,
    pub panel_title: Color32,
    pub button_text: Color32,

    // Interactive
    pub border: Color32,
    pub hover: Color32,
    pub highlight: Color32,

    // Splitter handles
    pub handle: Color32,
    pub handle_hover: Color32,
    pub drag_outline: Color32,
}

/// Sizes and radii used alongside the colors
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeMetrics {
    pub panel_radius: f32,
    pub title_radius: f32,
    pub button_radius: f32,
    pub content_margin: f32,
    pub title_margin_x: f32,
    pub title_margin_y: f32,
    pub outline_width: f32,
    pub border_width: f32,
}

/// A complete theme definition
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub metrics: ThemeMetrics,
}

impl Theme {
    /// The navy dark theme the editor uses for every widget.
    pub fn tabby_dark() -> Self {
        Self {
            name: "Tabby Dark".to_string(),
            colors: ThemeColors {
                window_background: hex_to_color32("#0a192f"),
                panel_background: hex_to_color32("#0f2547"),
                surface: hex_to_color32("#172a45"),

                text: hex_to_color32("#e6f1ff"),
                text_dim: hex_to_color32("#8892b0"),
                panel_title: hex_to_color32("#a8d8ff"),
                button_text: hex_to_color32("#64ffda"),

                border: hex_to_color32("#303C55"),
                hover: hex_to_color32("#303C55"),
                highlight: hex_to_color32("#b39ddb"),

                handle: hex_to_color32("#1a2c42"),
                handle_hover: hex_to_color32("#2c3e50"),
                drag_outline: Color32::from_rgb(80, 200, 255),
            },
            metrics: ThemeMetrics {
                panel_radius: 10.0,
                title_radius: 8.0,
                button_radius: 5.0,
                content_margin: 10.0,
                title_margin_x: 10.0,
                title_margin_y: 5.0,
                outline_width: 2.0,
                border_width: 1.0,
            },
        }
    }

    /// Applies the theme's colors to egui visuals
    pub fn apply_to_visuals(&self, visuals: &mut egui::Visuals) {
        let colors = &self.colors;

        visuals.window_fill = colors.window_background;
        visuals.panel_fill = colors.window_background;
        visuals.extreme_bg_color = colors.surface;
        visuals.faint_bg_color = colors.surface;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.hover;
        visuals.selection.stroke.color = colors.highlight;

        visuals.window_stroke.color = colors.border;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;

        visuals.widgets.inactive.bg_fill = colors.surface;
        visuals.widgets.inactive.weak_bg_fill = colors.surface;
        visuals.widgets.inactive.fg_stroke.color = colors.button_text;

        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.hovered.weak_bg_fill = colors.hover;
        visuals.widgets.hovered.fg_stroke.color = colors.highlight;

        visuals.widgets.active.bg_fill = colors.hover;
        visuals.widgets.active.weak_bg_fill = colors.hover;
        visuals.widgets.active.fg_stroke.color = colors.highlight;

        visuals.hyperlink_color = colors.button_text;
    }

    /// Builds a full set of dark visuals carrying this theme.
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();
        self.apply_to_visuals(&mut visuals);
        visuals
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tabby_dark()
    }
}

/// Converts a hex color string (like "#0a192f") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Returns the same color with a straight (unmultiplied) alpha
pub fn translucent(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
