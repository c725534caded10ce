//! Paints rows of cells through the glyph cache.
//!
//! # Paint order
//!
//! Cells are painted left to right within a row and rows top to bottom.
//! For each cell the renderer:
//!
//! 1. resolves its colored bitmap through the [`GlyphCache`]
//! 2. blits it at `((origin_column + index) * cell_width, origin_row * cell_height)`
//! 3. records that rectangle as the cell's bounding box
//! 4. fills the underline strip along the bottom edge if the cell is underlined
//!
//! The cell's write lock is held for the whole sequence, so a concurrent
//! blink tick or widget edit cannot change the cell halfway through a paint.

mod sink;

use std::sync::Arc;

use glyphgrid_config::Config;
use glyphgrid_fonts::{GlyphBitmapSource, GlyphCache};

use crate::cell::{Rect, SharedCell};
use crate::error::{Result, SurfaceError};
use crate::row::Row;

pub use sink::{CanvasSink, PaintSink};

/// Owns the glyph cache and paints rows into a [`PaintSink`].
#[derive(Debug)]
pub struct Renderer {
    cache: GlyphCache,
    cell_width: u32,
    cell_height: u32,
}

impl Renderer {
    /// Fails with [`SurfaceError::InvalidArgument`] if the cache's source
    /// reports a zero cell dimension.
    pub fn new(cache: GlyphCache) -> Result<Self> {
        let (cell_width, cell_height) = (cache.cell_width(), cache.cell_height());
        if cell_width == 0 || cell_height == 0 {
            return Err(SurfaceError::InvalidArgument(format!(
                "cell size must be non-zero, got {cell_width}x{cell_height}"
            )));
        }
        log::info!(
            "Renderer ready: {cell_width}x{cell_height} cells, glyph cache capacity {}",
            cache.capacity()
        );
        Ok(Self {
            cache,
            cell_width,
            cell_height,
        })
    }

    /// Renderer with a cache sized by `config.glyph_cache_capacity`.
    pub fn from_config(source: Arc<dyn GlyphBitmapSource>, config: &Config) -> Result<Self> {
        let cache = GlyphCache::new(source, config.glyph_cache_capacity)?;
        Self::new(cache)
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn cache(&self) -> &GlyphCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut GlyphCache {
        &mut self.cache
    }

    /// Paint `row` starting at cell coordinate `(origin_column, origin_row)`.
    ///
    /// Stops at the first cell whose glyph the source cannot supply; cells
    /// before it stay painted.
    pub fn paint_row(
        &mut self,
        row: &Row,
        origin_column: u32,
        origin_row: u32,
        sink: &mut dyn PaintSink,
    ) -> Result<()> {
        for (index, cell) in row.iter().enumerate() {
            let column = origin_column.saturating_add(index as u32);
            self.paint_cell(cell, column, origin_row, sink)?;
        }
        Ok(())
    }

    /// Paint consecutive rows downward from `origin_row`.
    pub fn paint_rows<'a>(
        &mut self,
        rows: impl IntoIterator<Item = &'a Row>,
        origin_column: u32,
        origin_row: u32,
        sink: &mut dyn PaintSink,
    ) -> Result<()> {
        for (offset, row) in rows.into_iter().enumerate() {
            let row_index = origin_row.saturating_add(offset as u32);
            self.paint_row(row, origin_column, row_index, sink)?;
        }
        Ok(())
    }

    fn paint_cell(
        &mut self,
        cell: &SharedCell,
        column: u32,
        row: u32,
        sink: &mut dyn PaintSink,
    ) -> Result<()> {
        let x = column.saturating_mul(self.cell_width);
        let y = row.saturating_mul(self.cell_height);

        let mut cell = cell.write();
        let bitmap = self.cache.resolve(&*cell).map_err(|e| {
            log::warn!("Cannot paint {:?} at ({column}, {row}): {e}", cell.character());
            SurfaceError::from(e)
        })?;

        sink.blit(&bitmap, x, y);
        cell.set_bounding_box(Rect::new(x, y, self.cell_width, self.cell_height));

        if cell.is_underlined() {
            let thickness = cell.underline_thickness().min(self.cell_height);
            sink.fill_rect(
                x,
                y.saturating_add(self.cell_height - thickness),
                self.cell_width,
                thickness,
                cell.foreground(),
            );
        }
        Ok(())
    }
}
