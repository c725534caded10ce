//! Error types for the glyphgrid surface.

use glyphgrid_fonts::GlyphError;
use thiserror::Error;

/// Errors raised by rendering and widget construction.
///
/// Index and caret arithmetic never fails: out-of-range positions clamp or
/// no-op instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// A value that must be positive or well-formed was not.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The glyph source has no bitmap for this character.
    #[error("No glyph available for {0:?}")]
    GlyphNotFound(char),
}

impl From<GlyphError> for SurfaceError {
    fn from(e: GlyphError) -> Self {
        match e {
            GlyphError::NotFound(c) => SurfaceError::GlyphNotFound(c),
            GlyphError::InvalidArgument(msg) => SurfaceError::InvalidArgument(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
