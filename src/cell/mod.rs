//! Character cells.
//!
//! A [`Cell`] is one character position with its full visual state. Cells
//! are shared between the widget that edits them, the renderer that paints
//! them and the blink timer that toggles them, so every live cell sits behind
//! a [`SharedCell`].

mod shared;

use glyphgrid_config::Color;
use glyphgrid_fonts::GlyphKey;

use crate::blink::BlinkTimer;

pub use shared::SharedCell;

/// A pixel rectangle on the paint surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the pixel `(x, y)` lies inside. Right and bottom edges are
    /// exclusive.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let left = i64::from(self.x);
        let top = i64::from(self.y);
        x >= left
            && y >= top
            && x < left + i64::from(self.width)
            && y < top + i64::from(self.height)
    }

    /// Smallest rectangle covering both. Empty rectangles are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self
            .x
            .saturating_add(self.width)
            .max(other.x.saturating_add(other.width));
        let bottom = self
            .y
            .saturating_add(self.height)
            .max(other.y.saturating_add(other.height));
        Rect::new(left, top, right - left, bottom - top)
    }
}

/// One character position and its styling.
///
/// Equality and hashing look at character, foreground and background only.
/// Hidden, underline, flips and bounding box are rendering hints.
pub struct Cell {
    character: char,
    foreground: Color,
    background: Color,
    hidden: bool,
    underlined: bool,
    underline_thickness: u32,
    flipped_horizontally: bool,
    flipped_vertically: bool,
    bounding_box: Rect,
    pub(crate) blink: Option<BlinkTimer>,
}

impl Cell {
    /// White on black, visible, not underlined or flipped.
    pub fn new(character: char) -> Self {
        Self {
            character,
            foreground: Color::WHITE,
            background: Color::BLACK,
            hidden: false,
            underlined: false,
            underline_thickness: clamp_thickness(
                glyphgrid_config::defaults::underline_thickness(),
                0,
            ),
            flipped_horizontally: false,
            flipped_vertically: false,
            bounding_box: Rect::default(),
            blink: None,
        }
    }

    pub fn blank() -> Self {
        Self::new(' ')
    }

    pub fn with_colors(character: char, foreground: Color, background: Color) -> Self {
        let mut cell = Self::new(character);
        cell.foreground = foreground;
        cell.background = background;
        cell
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn set_character(&mut self, character: char) {
        self.character = character;
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns whether anything changed. Setting the current value is a
    /// no-op.
    pub fn set_foreground(&mut self, color: Color) -> bool {
        if self.foreground == color {
            return false;
        }
        self.foreground = color;
        true
    }

    /// Returns whether anything changed. Setting the current value is a
    /// no-op.
    pub fn set_background(&mut self, color: Color) -> bool {
        if self.background == color {
            return false;
        }
        self.background = color;
        true
    }

    pub fn set_colors(&mut self, foreground: Color, background: Color) -> bool {
        let fg = self.set_foreground(foreground);
        let bg = self.set_background(background);
        fg || bg
    }

    /// Swap foreground and background.
    pub fn invert_colors(&mut self) {
        std::mem::swap(&mut self.foreground, &mut self.background);
    }

    pub fn tint_foreground(&mut self, factor: f64) {
        self.foreground = self.foreground.tint(factor);
    }

    pub fn tint_background(&mut self, factor: f64) {
        self.background = self.background.tint(factor);
    }

    pub fn tint_both(&mut self, factor: f64) {
        self.tint_foreground(factor);
        self.tint_background(factor);
    }

    pub fn shade_foreground(&mut self, factor: f64) {
        self.foreground = self.foreground.shade(factor);
    }

    pub fn shade_background(&mut self, factor: f64) {
        self.background = self.background.shade(factor);
    }

    pub fn shade_both(&mut self, factor: f64) {
        self.shade_foreground(factor);
        self.shade_background(factor);
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_underlined(&self) -> bool {
        self.underlined
    }

    pub fn set_underlined(&mut self, underlined: bool) {
        self.underlined = underlined;
    }

    pub fn underline_thickness(&self) -> u32 {
        self.underline_thickness
    }

    /// Values below 1 become 1. Once the cell has been painted, values above
    /// its pixel height become that height.
    pub fn set_underline_thickness(&mut self, thickness: i32) {
        self.underline_thickness = clamp_thickness(thickness, self.bounding_box.height);
    }

    pub fn is_flipped_horizontally(&self) -> bool {
        self.flipped_horizontally
    }

    pub fn set_flipped_horizontally(&mut self, flipped: bool) {
        self.flipped_horizontally = flipped;
    }

    pub fn is_flipped_vertically(&self) -> bool {
        self.flipped_vertically
    }

    pub fn set_flipped_vertically(&mut self, flipped: bool) {
        self.flipped_vertically = flipped;
    }

    /// Where the cell was last painted. Empty until the first paint.
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    pub(crate) fn set_bounding_box(&mut self, rect: Rect) {
        self.bounding_box = rect;
    }

    /// Blink period while a blink timer is attached, paused or not.
    pub fn blink_interval_ms(&self) -> Option<u64> {
        self.blink
            .as_ref()
            .map(|timer| timer.interval().as_millis() as u64)
    }

    /// Cache key for painting this cell in its current state.
    pub fn glyph_key(&self) -> GlyphKey {
        GlyphKey::for_cell(
            self.character,
            self.foreground,
            self.background,
            self.hidden,
            self.flipped_horizontally,
            self.flipped_vertically,
        )
    }
}

fn clamp_thickness(thickness: i32, cell_height: u32) -> u32 {
    let thickness = thickness.max(1) as u32;
    if cell_height == 0 {
        thickness
    } else {
        thickness.min(cell_height)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// Copies every visual attribute. The copy does not blink.
impl Clone for Cell {
    fn clone(&self) -> Self {
        Self {
            character: self.character,
            foreground: self.foreground,
            background: self.background,
            hidden: self.hidden,
            underlined: self.underlined,
            underline_thickness: self.underline_thickness,
            flipped_horizontally: self.flipped_horizontally,
            flipped_vertically: self.flipped_vertically,
            bounding_box: self.bounding_box,
            blink: None,
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.character == other.character
            && self.foreground == other.foreground
            && self.background == other.background
    }
}

impl Eq for Cell {}

impl std::hash::Hash for Cell {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.character.hash(state);
        self.foreground.hash(state);
        self.background.hash(state);
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("character", &self.character)
            .field("foreground", &self.foreground)
            .field("background", &self.background)
            .field("hidden", &self.hidden)
            .field("underlined", &self.underlined)
            .field("bounding_box", &self.bounding_box)
            .field("blink", &self.blink)
            .finish()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.character)
    }
}

impl From<char> for Cell {
    fn from(character: char) -> Self {
        Self::new(character)
    }
}

impl From<&Cell> for GlyphKey {
    fn from(cell: &Cell) -> Self {
        cell.glyph_key()
    }
}
