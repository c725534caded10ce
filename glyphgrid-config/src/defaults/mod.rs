//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` fields.
//! Everything is re-exported from this module so call-sites only need
//! `crate::defaults::*`.

mod colors;
mod misc;

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::{
    button_hovered_colors, button_normal_colors, button_pressed_colors,
    text_field_background, text_field_caret_background, text_field_caret_foreground,
    text_field_foreground,
};

// ── Caching, timing & input ────────────────────────────────────────────────
pub use misc::{
    allowed_character_pattern, blink_interval_ms, bool_true, button_ending_character,
    button_starting_character, glyph_cache_capacity, underline_thickness,
};
