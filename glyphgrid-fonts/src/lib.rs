//! Glyph supply and caching for the glyphgrid cell surface.
//!
//! This crate provides:
//! - The `GlyphBitmapSource` contract that font loaders implement
//! - `StaticGlyphSource`, an in-memory source for pre-decoded glyph masks
//! - `GlyphCache`, an LRU cache of colored, mirrored glyph bitmaps
//!
//! # Architecture
//!
//! A source hands out raw coverage masks, one per character. The cache turns a
//! mask into a ready-to-blit RGBA bitmap for one `GlyphKey` (character, colors
//! and flips) and keeps the result, so repainting an unchanged cell never
//! re-runs the per-pixel color substitution or the mirroring.

pub mod error;
pub mod glyph_cache;
pub mod source;

// Re-export main types for convenience
pub use error::GlyphError;
pub use glyph_cache::{CacheStats, GlyphBitmap, GlyphCache, GlyphKey};
pub use source::{GlyphBitmapSource, RawGlyph, StaticGlyphSource};
