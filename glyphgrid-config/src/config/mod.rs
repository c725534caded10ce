//! Core `Config` struct definition.
//!
//! # Sub-modules
//!
//! - [`persistence`]: YAML load/save and XDG path helpers
//!
//! Widget styles live in [`crate::styles`] and are nested under their own
//! keys (`button:`, `text_field:`) in the YAML file.

mod persistence;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::styles::{ButtonStyle, TextFieldStyle};

/// Settings for the cell surface and its widgets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    // ========================================================================
    // Rendering
    // ========================================================================
    /// Maximum number of colored glyph bitmaps kept by the glyph cache
    #[serde(default = "crate::defaults::glyph_cache_capacity")]
    pub glyph_cache_capacity: usize,

    // ========================================================================
    // Cells
    // ========================================================================
    /// Blink period used when a cell asks for a non-positive interval
    #[serde(default = "crate::defaults::blink_interval_ms")]
    pub blink_interval_ms: u64,

    /// Underline thickness given to newly created cells, in pixels
    #[serde(default = "crate::defaults::underline_thickness")]
    pub underline_thickness: i32,

    // ========================================================================
    // Widgets
    // ========================================================================
    #[serde(default)]
    pub button: ButtonStyle,

    #[serde(default)]
    pub text_field: TextFieldStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyph_cache_capacity: crate::defaults::glyph_cache_capacity(),
            blink_interval_ms: crate::defaults::blink_interval_ms(),
            underline_thickness: crate::defaults::underline_thickness(),
            button: ButtonStyle::default(),
            text_field: TextFieldStyle::default(),
        }
    }
}

impl Config {
    /// Check field values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.glyph_cache_capacity == 0 {
            return Err(ConfigError::Validation(
                "glyph_cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.blink_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "blink_interval_ms must be at least 1".to_string(),
            ));
        }
        if let Err(e) = regex::Regex::new(&self.text_field.allowed_pattern) {
            return Err(ConfigError::Validation(format!(
                "text_field.allowed_pattern is not a valid regex: {e}"
            )));
        }
        Ok(())
    }
}
