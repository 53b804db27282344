//! Theme configuration for DuoFM.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub tree: TreeTheme,
    #[serde(default)]
    pub listing: ListingTheme,
    #[serde(default)]
    pub addressbar: AddressBarTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Folder tree pane colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeTheme {
    pub dir_fg: String,
    pub selected_fg: String,
    pub marker_fg: String,
}

impl Default for TreeTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".to_string(),
            selected_fg: "yellow".to_string(),
            marker_fg: "dark_gray".to_string(),
        }
    }
}

/// File listing table colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingTheme {
    pub dir_fg: String,
    pub symlink_fg: String,
    pub hidden_fg: String,
    pub selected_fg: String,
    pub header_fg: String,
    pub archive_fg: String,
}

impl Default for ListingTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".to_string(),
            symlink_fg: "cyan".to_string(),
            hidden_fg: "dark_gray".to_string(),
            selected_fg: "yellow".to_string(),
            header_fg: "green".to_string(),
            archive_fg: "magenta".to_string(),
        }
    }
}

/// Address bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressBarTheme {
    pub bg: String,
    pub path_fg: String,
    pub edit_fg: String,
}

impl Default for AddressBarTheme {
    fn default() -> Self {
        Self {
            bg: "dark_gray".to_string(),
            path_fg: "white".to_string(),
            edit_fg: "yellow".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarTheme {
    pub bg: String,
    pub position_fg: String,
    pub hidden_fg: String,
    pub message_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            position_fg: "black".to_string(),
            hidden_fg: "yellow".to_string(),
            message_fg: "magenta".to_string(),
        }
    }
}

/// Popup dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupTheme {
    pub border_fg: String,
    pub error_fg: String,
    pub selected_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "cyan".to_string(),
            error_fg: "red".to_string(),
            selected_fg: "yellow".to_string(),
        }
    }
}

/// Parses a color string into a ratatui [`Color`](ratatui::style::Color).
///
/// Accepts the standard named colors (case-insensitive) and `#rrggbb` hex
/// values. Unknown strings fall back to `Color::Reset`.
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
        hex if hex.starts_with('#') && hex.len() == 7 => {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}
