//! LRU cache of colored glyph bitmaps.
//!
//! Colorizing a glyph touches every pixel of the cell and mirroring touches
//! them again, so doing that on every repaint dominates frame time. The cache
//! keys finished bitmaps by [`GlyphKey`] and hands out shared `Arc`s: two
//! resolutions of the same key return the very same bitmap object.

mod filter;
mod key;

use std::num::NonZeroUsize;
use std::sync::Arc;

use image::RgbaImage;
use lru::LruCache;

use crate::error::GlyphError;
use crate::source::GlyphBitmapSource;

pub use key::GlyphKey;

/// A colored, ready-to-blit glyph. Shared between the cache and callers.
pub type GlyphBitmap = Arc<RgbaImage>;

/// Running counters for cache behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Fixed-capacity, least-recently-used glyph cache.
///
/// Not internally synchronized: one owner (normally the renderer) holds it
/// and resolves glyphs on its own thread.
pub struct GlyphCache {
    source: Arc<dyn GlyphBitmapSource>,
    entries: LruCache<GlyphKey, GlyphBitmap>,
    stats: CacheStats,
}

impl GlyphCache {
    /// Create a cache holding at most `capacity` bitmaps.
    ///
    /// Fails with [`GlyphError::InvalidArgument`] if `capacity` is zero.
    pub fn new(source: Arc<dyn GlyphBitmapSource>, capacity: usize) -> Result<Self, GlyphError> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            GlyphError::InvalidArgument("glyph cache capacity must be at least 1".to_string())
        })?;
        Ok(Self {
            source,
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        })
    }

    /// Return the bitmap for `key`, rasterizing it on a miss.
    ///
    /// A hit refreshes the entry's recency. A miss that finds the cache full
    /// evicts the least recently used entry first.
    pub fn resolve(&mut self, key: impl Into<GlyphKey>) -> Result<GlyphBitmap, GlyphError> {
        let key = key.into();

        if let Some(bitmap) = self.entries.get(&key) {
            self.stats.hits += 1;
            log::trace!("Glyph cache hit for {:?}", key.character);
            return Ok(Arc::clone(bitmap));
        }

        self.stats.misses += 1;
        log::trace!("Glyph cache miss for {:?}", key.character);

        let bitmap = Arc::new(self.rasterize(&key)?);
        if let Some((evicted, _)) = self.entries.push(key, Arc::clone(&bitmap))
            && evicted != key
        {
            self.stats.evictions += 1;
            log::debug!(
                "Glyph cache evicted {:?} (capacity {})",
                evicted.character,
                self.entries.cap()
            );
        }
        Ok(bitmap)
    }

    fn rasterize(&self, key: &GlyphKey) -> Result<RgbaImage, GlyphError> {
        let raw = self.source.bitmap_for(key.character)?;
        if raw.width() != self.cell_width() || raw.height() != self.cell_height() {
            log::debug!(
                "Glyph {:?} is {}x{}, cell is {}x{}; painting as-is",
                key.character,
                raw.width(),
                raw.height(),
                self.cell_width(),
                self.cell_height()
            );
        }

        let mut image = filter::colorize(&raw, key.foreground, key.background);
        filter::mirror(
            &mut image,
            key.flipped_horizontally,
            key.flipped_vertically,
        );
        Ok(image)
    }

    /// Whether `key` is cached. Does not change recency.
    pub fn contains(&self, key: &GlyphKey) -> bool {
        self.entries.contains(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn cell_width(&self) -> u32 {
        self.source.cell_width()
    }

    pub fn cell_height(&self) -> u32 {
        self.source.cell_height()
    }

    pub fn source(&self) -> &Arc<dyn GlyphBitmapSource> {
        &self.source
    }
}

impl std::fmt::Debug for GlyphCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("stats", &self.stats)
            .finish()
    }
}
