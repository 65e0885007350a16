//! Theme configuration.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read_to_string, CoreError, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub card: CardTheme,
    #[serde(default)]
    pub search: SearchTheme,
    #[serde(default)]
    pub controls: ControlsTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Product card colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardTheme {
    pub border_fg: String,
    pub focused_border_fg: String,
    pub selected_border_fg: String,
    pub image_fg: String,
    pub title_fg: String,
    pub description_fg: String,
    pub price_fg: String,
    pub tags_fg: String,
    pub selected_marker_fg: String,
    pub unselected_marker_fg: String,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            border_fg: "dark_gray".to_string(),
            focused_border_fg: "cyan".to_string(),
            selected_border_fg: "green".to_string(),
            image_fg: "dark_gray".to_string(),
            title_fg: "white".to_string(),
            description_fg: "gray".to_string(),
            price_fg: "yellow".to_string(),
            tags_fg: "blue".to_string(),
            selected_marker_fg: "green".to_string(),
            unselected_marker_fg: "dark_gray".to_string(),
        }
    }
}

/// Search bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchTheme {
    pub border_fg: String,
    pub focused_border_fg: String,
    pub text_fg: String,
    pub placeholder_fg: String,
}

impl Default for SearchTheme {
    fn default() -> Self {
        Self {
            border_fg: "dark_gray".to_string(),
            focused_border_fg: "yellow".to_string(),
            text_fg: "white".to_string(),
            placeholder_fg: "dark_gray".to_string(),
        }
    }
}

/// Sort/delete/reset controls row colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsTheme {
    pub fg: String,
    pub key_fg: String,
    pub delete_fg: String,
}

impl Default for ControlsTheme {
    fn default() -> Self {
        Self {
            fg: "gray".to_string(),
            key_fg: "cyan".to_string(),
            delete_fg: "red".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarTheme {
    pub bg: String,
    pub position_fg: String,
    pub message_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            position_fg: "black".to_string(),
            message_fg: "magenta".to_string(),
        }
    }
}

/// Popup/dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupTheme {
    pub border_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        hex if hex.len() == 7 && hex.is_ascii() && hex.starts_with('#') => {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}
