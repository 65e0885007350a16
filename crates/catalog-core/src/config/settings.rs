//! Application configuration loaded from a TOML file.
//!
//! The default configuration matches the values shown in `config/default.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read_to_string, CoreError, CoreResult};
use crate::items::search::DEFAULT_THRESHOLD;

/// Top-level application configuration.
///
/// All fields have sensible defaults so the catalog works without a config
/// file. Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
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
        let content = read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// General behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Ask for confirmation before deleting selected products.
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

/// Search bar and fuzzy matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum edits per query character for a field to match.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Quiet period after the last keystroke before the query applies.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Queries shorter than this (in characters) apply as empty.
    #[serde(default)]
    pub min_query_len: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            debounce_ms: default_debounce_ms(),
            min_query_len: None,
        }
    }
}

/// Card grid geometry, in terminal cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_landscape_columns")]
    pub landscape_columns: u16,
    /// Height-to-width ratio of one terminal cell.
    #[serde(default = "default_cell_aspect")]
    pub cell_aspect: f64,
    #[serde(default = "default_card_gap")]
    pub card_gap: u16,
    #[serde(default = "default_padding")]
    pub padding: u16,
    #[serde(default = "default_min_card_width")]
    pub min_card_width: u16,
    #[serde(default = "default_portrait_card_height")]
    pub portrait_card_height: u16,
    #[serde(default = "default_landscape_card_height")]
    pub landscape_card_height: u16,
    /// Extra rows prepared above and below the viewport.
    #[serde(default = "default_overscan_rows")]
    pub overscan_rows: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            landscape_columns: default_landscape_columns(),
            cell_aspect: default_cell_aspect(),
            card_gap: default_card_gap(),
            padding: default_padding(),
            min_card_width: default_min_card_width(),
            portrait_card_height: default_portrait_card_height(),
            landscape_card_height: default_landscape_card_height(),
            overscan_rows: default_overscan_rows(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_landscape_columns() -> u16 {
    2
}

fn default_cell_aspect() -> f64 {
    2.0
}

fn default_card_gap() -> u16 {
    1
}

fn default_padding() -> u16 {
    1
}

fn default_min_card_width() -> u16 {
    24
}

fn default_portrait_card_height() -> u16 {
    9
}

fn default_landscape_card_height() -> u16 {
    8
}

fn default_overscan_rows() -> usize {
    1
}
