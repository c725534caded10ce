/// Color values shared by cells, glyph filters and paint sinks
use serde::{Deserialize, Serialize};

fn opaque() -> u8 {
    255
}

/// A color in RGBA format.
///
/// Equality is exact on all four channels; cells and the glyph cache rely on
/// this to decide when two colors are "the same".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    pub fn as_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Lighten toward white. `factor` is clamped to `0.0..=1.0`; 1.0 yields white.
    pub fn tint(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let lift = |c: u8| (c as f64 + (255.0 - c as f64) * factor).round() as u8;
        Self::new(lift(self.r), lift(self.g), lift(self.b), self.a)
    }

    /// Darken toward black. `factor` is clamped to `0.0..=1.0`; 1.0 yields black.
    pub fn shade(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let drop = |c: u8| (c as f64 * (1.0 - factor)).round() as u8;
        Self::new(drop(self.r), drop(self.g), drop(self.b), self.a)
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1), alpha included.
    pub fn lerp(self, other: Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::new(r, g, b, a)
    }
}
