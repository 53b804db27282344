//! Application configuration loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::nav::search::SortField;

/// Top-level application configuration.
///
/// All fields have sensible defaults so DuoFM works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// General file-browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default = "default_true")]
    pub sort_dir_first: bool,
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl GeneralConfig {
    /// Resolves the `default_sort` string to a [`SortField`].
    ///
    /// Unknown values fall back to sorting by name.
    pub fn default_sort_field(&self) -> SortField {
        match self.default_sort.as_str() {
            "size" => SortField::Size,
            "created" => SortField::Created,
            "modified" => SortField::Modified,
            _ => SortField::Name,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            default_sort: default_sort(),
            sort_dir_first: true,
            confirm_delete: true,
        }
    }
}

/// UI layout and display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Fraction of the window width given to the tree pane (0.1–0.9).
    #[serde(default = "default_tree_ratio")]
    pub tree_ratio: f64,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tree_ratio: default_tree_ratio(),
            date_format: default_date_format(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sort() -> String {
    "name".to_string()
}

fn default_tree_ratio() -> f64 {
    0.3
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}
