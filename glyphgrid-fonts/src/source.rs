//! Glyph bitmap sources.
//!
//! A source owns the font: it knows the fixed cell size and can hand out the
//! uncolored coverage mask of any character it supports. Parsing font files
//! or glyph sheets happens before this point, in whatever loader implements
//! [`GlyphBitmapSource`].

use std::collections::HashMap;

use image::GrayImage;

use crate::error::GlyphError;

/// An uncolored glyph: 8-bit coverage, 255 = ink, 0 = paper.
pub type RawGlyph = GrayImage;

/// Supplies raw glyph masks and the pixel size of one cell.
pub trait GlyphBitmapSource: Send + Sync {
    /// Coverage mask for `character`.
    ///
    /// Fails with [`GlyphError::NotFound`] when the font has no such glyph.
    fn bitmap_for(&self, character: char) -> Result<RawGlyph, GlyphError>;

    /// Width of one cell in pixels.
    fn cell_width(&self) -> u32;

    /// Height of one cell in pixels.
    fn cell_height(&self) -> u32;
}

/// In-memory source for hosts that already decoded their glyphs.
#[derive(Debug, Clone)]
pub struct StaticGlyphSource {
    cell_width: u32,
    cell_height: u32,
    glyphs: HashMap<char, RawGlyph>,
}

impl StaticGlyphSource {
    /// Create an empty source with the given cell size.
    pub fn new(cell_width: u32, cell_height: u32) -> Result<Self, GlyphError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(GlyphError::InvalidArgument(format!(
                "cell size must be non-zero, got {cell_width}x{cell_height}"
            )));
        }
        Ok(Self {
            cell_width,
            cell_height,
            glyphs: HashMap::new(),
        })
    }

    /// Register (or replace) the mask for `character`.
    pub fn insert(&mut self, character: char, glyph: RawGlyph) {
        if glyph.width() != self.cell_width || glyph.height() != self.cell_height {
            log::debug!(
                "Glyph {:?} is {}x{}, cell is {}x{}",
                character,
                glyph.width(),
                glyph.height(),
                self.cell_width,
                self.cell_height
            );
        }
        self.glyphs.insert(character, glyph);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_glyph(mut self, character: char, glyph: RawGlyph) -> Self {
        self.insert(character, glyph);
        self
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl GlyphBitmapSource for StaticGlyphSource {
    fn bitmap_for(&self, character: char) -> Result<RawGlyph, GlyphError> {
        self.glyphs
            .get(&character)
            .cloned()
            .ok_or(GlyphError::NotFound(character))
    }

    fn cell_width(&self) -> u32 {
        self.cell_width
    }

    fn cell_height(&self) -> u32 {
        self.cell_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_cell_size_rejected() {
        assert!(matches!(
            StaticGlyphSource::new(0, 8),
            Err(GlyphError::InvalidArgument(_))
        ));
        assert!(StaticGlyphSource::new(8, 0).is_err());
    }

    #[test]
    fn test_lookup() {
        let source =
            StaticGlyphSource::new(2, 2).unwrap().with_glyph('a', GrayImage::new(2, 2));
        assert_eq!(source.len(), 1);
        assert!(source.bitmap_for('a').is_ok());
        assert_eq!(source.bitmap_for('b'), Err(GlyphError::NotFound('b')));
    }
}
