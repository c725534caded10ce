//! Default values for widget colors.

use crate::color::Color;
use crate::styles::ColorPair;

// Text field colors
pub fn text_field_foreground() -> Color {
    Color::from_hex(0x52F2EA) // Light cyan text
}

pub fn text_field_background() -> Color {
    Color::from_hex(0x21B6A8) // Teal field
}

pub fn text_field_caret_foreground() -> Color {
    Color::from_hex(0x21B6A8) // Inverse of the field colors
}

pub fn text_field_caret_background() -> Color {
    Color::from_hex(0x52F2EA)
}

// Button colors
pub fn button_normal_colors() -> ColorPair {
    ColorPair {
        foreground: Color::from_hex(0x2DFF63), // Bright green label
        background: Color::from_hex(0x45422E), // Olive
    }
}

pub fn button_hovered_colors() -> ColorPair {
    ColorPair {
        foreground: Color::from_hex(0x45422E),
        background: Color::from_hex(0x2DFF63), // Inverted on hover
    }
}

pub fn button_pressed_colors() -> ColorPair {
    ColorPair {
        foreground: Color::from_hex(0x2DFF63),
        background: Color::from_hex(0x22201A), // Darker olive while held
    }
}
