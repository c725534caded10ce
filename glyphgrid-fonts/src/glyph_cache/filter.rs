//! Per-pixel color substitution and mirroring.

use glyphgrid_config::Color;
use image::{Rgba, RgbaImage, imageops};

use crate::source::RawGlyph;

/// Map ink to `foreground` and paper to `background`; partial coverage
/// blends linearly between the two.
pub(crate) fn colorize(raw: &RawGlyph, foreground: Color, background: Color) -> RgbaImage {
    RgbaImage::from_fn(raw.width(), raw.height(), |x, y| {
        let coverage = raw.get_pixel(x, y).0[0];
        let color = match coverage {
            255 => foreground,
            0 => background,
            c => background.lerp(foreground, c as f64 / 255.0),
        };
        Rgba(color.as_array())
    })
}

pub(crate) fn mirror(image: &mut RgbaImage, horizontally: bool, vertically: bool) {
    if horizontally {
        imageops::flip_horizontal_in_place(image);
    }
    if vertically {
        imageops::flip_vertical_in_place(image);
    }
}
