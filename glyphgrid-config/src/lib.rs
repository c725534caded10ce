//! Configuration system for the glyphgrid cell surface.
//!
//! This crate provides configuration loading, saving, and default values
//! for the surface and its widgets. It includes:
//!
//! - The `Color` value type shared by cells, glyphs and sinks
//! - Glyph cache and blink timing settings
//! - Button and text field style definitions

pub mod color;
pub mod config;
pub mod defaults;
pub mod error;
pub mod styles;

// Re-export main types for convenience
pub use color::Color;
pub use config::Config;
pub use error::ConfigError;
pub use styles::{ButtonStyle, ColorPair, KeyToggles, TextFieldStyle};
