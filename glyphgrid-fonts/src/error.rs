//! Typed error types for glyphgrid-fonts.

use thiserror::Error;

/// Errors raised while supplying or caching glyphs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// The source has no glyph for this character.
    #[error("Glyph not found for character {0:?}")]
    NotFound(char),

    /// A required value was missing or out of its valid domain
    /// (zero cache capacity, zero-sized cells, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
