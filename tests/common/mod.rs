//! Shared integration test helpers for glyphgrid.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::{glyph_source, BlinkEnv, RecordingSink};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::sync::Arc;

use glyphgrid::{
    BlinkScheduler, Color, ManualScheduler, PaintSink, RedrawReceiver, Renderer,
    StaticGlyphSource, redraw_channel,
};
use image::{GrayImage, Luma, RgbaImage};

pub const CELL_WIDTH: u32 = 4;
pub const CELL_HEIGHT: u32 = 6;

/// Every printable ASCII character plus a few extras. Space is all paper;
/// every other glyph is solid ink.
pub fn glyph_source() -> StaticGlyphSource {
    let mut source =
        StaticGlyphSource::new(CELL_WIDTH, CELL_HEIGHT).expect("Failed to create glyph source");
    for c in (' '..='~').chain(['é', '█']) {
        let coverage = if c == ' ' { 0 } else { 255 };
        source.insert(c, GrayImage::from_pixel(CELL_WIDTH, CELL_HEIGHT, Luma([coverage])));
    }
    source
}

pub fn renderer() -> Renderer {
    let cache = glyphgrid::GlyphCache::new(Arc::new(glyph_source()), 64)
        .expect("Failed to create glyph cache");
    Renderer::new(cache).expect("Failed to create renderer")
}

/// A manual clock wired to a blink scheduler and a redraw receiver.
pub struct BlinkEnv {
    pub clock: Arc<ManualScheduler>,
    pub blink: BlinkScheduler,
    pub redraws: RedrawReceiver,
}

impl BlinkEnv {
    pub fn new() -> Self {
        let clock = Arc::new(ManualScheduler::new());
        let (tx, redraws) = redraw_channel();
        let blink = BlinkScheduler::new(clock.clone(), tx);
        Self {
            clock,
            blink,
            redraws,
        }
    }

    pub fn advance_ms(&self, ms: u64) -> usize {
        self.clock.advance(std::time::Duration::from_millis(ms))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blit {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Color of the bitmap's top-left pixel.
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: Color,
}

/// Paint sink that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub blits: Vec<Blit>,
    pub fills: Vec<Fill>,
}

impl PaintSink for RecordingSink {
    fn blit(&mut self, bitmap: &RgbaImage, x: u32, y: u32) {
        self.blits.push(Blit {
            x,
            y,
            width: bitmap.width(),
            height: bitmap.height(),
            color: Color::from(bitmap.get_pixel(0, 0).0),
        });
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        self.fills.push(Fill {
            x,
            y,
            width,
            height,
            color,
        });
    }
}

/// Pixel at the center of cell `(column, row)`.
pub fn cell_center(column: u32, row: u32) -> (i32, i32) {
    (
        (column * CELL_WIDTH + CELL_WIDTH / 2) as i32,
        (row * CELL_HEIGHT + CELL_HEIGHT / 2) as i32,
    )
}
