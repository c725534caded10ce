//! Fixed-length rows of cells.

use std::ops::{Bound, Range, RangeBounds};

use glyphgrid_config::{Color, ColorPair};

use crate::blink::BlinkScheduler;
use crate::cell::{Cell, SharedCell};

/// Which color of a cell an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayer {
    Foreground,
    Background,
    Both,
}

/// One line of cells. The length is fixed at construction.
///
/// Styling methods take `&self`: cells are individually locked, and each
/// cell is updated under its own lock. Index ranges are clamped to the row.
pub struct Row {
    cells: Vec<SharedCell>,
}

impl Row {
    /// `length` space cells.
    pub fn blank(length: usize) -> Self {
        Self {
            cells: (0..length).map(|_| SharedCell::new(Cell::blank())).collect(),
        }
    }

    /// One cell per character of `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            cells: text.chars().map(|c| SharedCell::new(Cell::new(c))).collect(),
        }
    }

    /// `text` padded with spaces or truncated to exactly `length` cells.
    pub fn with_length(text: &str, length: usize) -> Self {
        let chars = text.chars().chain(std::iter::repeat(' ')).take(length);
        Self {
            cells: chars.map(|c| SharedCell::new(Cell::new(c))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, index: usize) -> Option<&SharedCell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[SharedCell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SharedCell> {
        self.cells.iter()
    }

    /// Put `cell` at `index`. Out of bounds is a no-op returning false.
    ///
    /// The outgoing cell stops blinking; handles to it elsewhere stay valid.
    pub fn replace_cell(&mut self, index: usize, cell: Cell) -> bool {
        let Some(slot) = self.cells.get_mut(index) else {
            log::debug!("replace_cell({index}) outside row of {}", self.cells.len());
            return false;
        };
        let old = std::mem::replace(slot, SharedCell::new(cell));
        old.disable_blink();
        true
    }

    pub fn set_character(&self, index: usize, character: char) -> bool {
        match self.cells.get(index) {
            Some(cell) => {
                cell.write().set_character(character);
                true
            }
            None => false,
        }
    }

    /// Overwrite characters from index 0. Extra text is ignored; cells past
    /// the end of `text` keep their character.
    pub fn write_text(&self, text: &str) {
        for (cell, c) in self.cells.iter().zip(text.chars()) {
            cell.write().set_character(c);
        }
    }

    pub fn text(&self) -> String {
        self.cells.iter().map(|cell| cell.read().character()).collect()
    }

    fn clamp<R: RangeBounds<usize>>(&self, range: R) -> Range<usize> {
        let len = self.cells.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        let end = end.min(len);
        start.min(end)..end
    }

    fn each<R: RangeBounds<usize>>(&self, range: R, mut apply: impl FnMut(usize, &mut Cell)) {
        let range = self.clamp(range);
        for (i, cell) in self.cells[range.clone()].iter().enumerate() {
            apply(range.start + i, &mut *cell.write());
        }
    }

    pub fn set_hidden<R: RangeBounds<usize>>(&self, range: R, hidden: bool) {
        self.each(range, |_, cell| cell.set_hidden(hidden));
    }

    pub fn set_underlined<R: RangeBounds<usize>>(&self, range: R, underlined: bool) {
        self.each(range, |_, cell| cell.set_underlined(underlined));
    }

    pub fn set_underline_thickness<R: RangeBounds<usize>>(&self, range: R, thickness: i32) {
        self.each(range, |_, cell| cell.set_underline_thickness(thickness));
    }

    pub fn invert_colors<R: RangeBounds<usize>>(&self, range: R) {
        self.each(range, |_, cell| cell.invert_colors());
    }

    pub fn set_foreground<R: RangeBounds<usize>>(&self, range: R, color: Color) {
        self.each(range, |_, cell| {
            cell.set_foreground(color);
        });
    }

    pub fn set_background<R: RangeBounds<usize>>(&self, range: R, color: Color) {
        self.each(range, |_, cell| {
            cell.set_background(color);
        });
    }

    pub fn set_colors<R: RangeBounds<usize>>(&self, range: R, colors: ColorPair) {
        self.each(range, |_, cell| {
            cell.set_colors(colors.foreground, colors.background);
        });
    }

    /// Lighten toward white by `factor`.
    pub fn tint<R: RangeBounds<usize>>(&self, range: R, factor: f64, layer: ColorLayer) {
        self.each(range, |_, cell| match layer {
            ColorLayer::Foreground => cell.tint_foreground(factor),
            ColorLayer::Background => cell.tint_background(factor),
            ColorLayer::Both => cell.tint_both(factor),
        });
    }

    /// Darken toward black by `factor`.
    pub fn shade<R: RangeBounds<usize>>(&self, range: R, factor: f64, layer: ColorLayer) {
        self.each(range, |_, cell| match layer {
            ColorLayer::Foreground => cell.shade_foreground(factor),
            ColorLayer::Background => cell.shade_background(factor),
            ColorLayer::Both => cell.shade_both(factor),
        });
    }

    /// Blend each cell toward `target`, weakest at the start of the range and
    /// reaching `target` exactly on the last cell.
    pub fn apply_gradient<R: RangeBounds<usize>>(
        &self,
        range: R,
        target: Color,
        layer: ColorLayer,
    ) {
        let range = self.clamp(range);
        let steps = range.len() as f64;
        let start = range.start;
        self.each(range, |i, cell| {
            let t = (i - start + 1) as f64 / steps;
            let fg = cell.foreground().lerp(target, t);
            let bg = cell.background().lerp(target, t);
            match layer {
                ColorLayer::Foreground => {
                    cell.set_foreground(fg);
                }
                ColorLayer::Background => {
                    cell.set_background(bg);
                }
                ColorLayer::Both => {
                    cell.set_colors(fg, bg);
                }
            }
        });
    }

    /// Start blinking every cell in `range`.
    pub fn enable_blink<R: RangeBounds<usize>>(
        &self,
        range: R,
        interval_ms: i64,
        blink: &BlinkScheduler,
    ) {
        for cell in &self.cells[self.clamp(range)] {
            cell.enable_blink(interval_ms, blink);
        }
    }

    pub fn disable_blink<R: RangeBounds<usize>>(&self, range: R) {
        for cell in &self.cells[self.clamp(range)] {
            cell.disable_blink();
        }
    }

    pub fn pause_blink<R: RangeBounds<usize>>(&self, range: R) {
        for cell in &self.cells[self.clamp(range)] {
            cell.pause_blink();
        }
    }

    pub fn resume_blink<R: RangeBounds<usize>>(&self, range: R) {
        for cell in &self.cells[self.clamp(range)] {
            cell.resume_blink();
        }
    }
}

/// Deep copy: fresh cells with the same attributes, none blinking.
impl Clone for Row {
    fn clone(&self) -> Self {
        Self {
            cells: self
                .cells
                .iter()
                .map(|cell| SharedCell::new(cell.read().clone()))
                .collect(),
        }
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.cells.len() == other.cells.len()
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.ptr_eq(b) || *a.read() == *b.read())
    }
}

impl From<&str> for Row {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Row").field("text", &self.text()).finish()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a SharedCell;
    type IntoIter = std::slice::Iter<'a, SharedCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_ranges() {
        let row = Row::blank(5);
        assert_eq!(row.clamp(..), 0..5);
        assert_eq!(row.clamp(2..), 2..5);
        assert_eq!(row.clamp(1..=3), 1..4);
        assert_eq!(row.clamp(3..99), 3..5);
        assert_eq!(row.clamp(9..12), 5..5);
    }

    #[test]
    fn test_clone_is_deep() {
        let row = Row::from_text("ab");
        let copy = row.clone();
        assert_eq!(row, copy);
        copy.set_character(0, 'z');
        assert_eq!(row.text(), "ab");
        assert_eq!(copy.text(), "zb");
    }
}
