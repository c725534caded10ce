//! Widget style definitions.
//!
//! These are plain data; the widgets in the root crate read them at
//! construction time and keep their own copies afterwards.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A foreground/background color pair applied to every cell of a widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: Color,
    pub background: Color,
}

impl ColorPair {
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

/// Colors and delimiters for a button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ButtonStyle {
    /// Character drawn in the first cell, left of the label
    #[serde(default = "crate::defaults::button_starting_character")]
    pub starting_character: char,

    /// Character drawn in the last cell, right of the label
    #[serde(default = "crate::defaults::button_ending_character")]
    pub ending_character: char,

    #[serde(default = "crate::defaults::button_normal_colors")]
    pub normal: ColorPair,

    #[serde(default = "crate::defaults::button_hovered_colors")]
    pub hovered: ColorPair,

    #[serde(default = "crate::defaults::button_pressed_colors")]
    pub pressed: ColorPair,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            starting_character: crate::defaults::button_starting_character(),
            ending_character: crate::defaults::button_ending_character(),
            normal: crate::defaults::button_normal_colors(),
            hovered: crate::defaults::button_hovered_colors(),
            pressed: crate::defaults::button_pressed_colors(),
        }
    }
}

/// Which editing keys a text field reacts to.
///
/// A disabled key is ignored completely, including its repaint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyToggles {
    #[serde(default = "crate::defaults::bool_true")]
    pub home: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub end: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub delete: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub left_arrow: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub right_arrow: bool,
    #[serde(default = "crate::defaults::bool_true")]
    pub backspace: bool,
}

impl Default for KeyToggles {
    fn default() -> Self {
        Self {
            home: true,
            end: true,
            delete: true,
            left_arrow: true,
            right_arrow: true,
            backspace: true,
        }
    }
}

/// Colors, caret colors, key toggles and input filter for a text field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextFieldStyle {
    /// Foreground of non-caret cells
    #[serde(default = "crate::defaults::text_field_foreground")]
    pub foreground: Color,

    /// Background of non-caret cells
    #[serde(default = "crate::defaults::text_field_background")]
    pub background: Color,

    #[serde(default = "crate::defaults::text_field_caret_foreground")]
    pub caret_foreground: Color,

    #[serde(default = "crate::defaults::text_field_caret_background")]
    pub caret_background: Color,

    /// Regex a typed character must fully match to be accepted
    #[serde(default = "crate::defaults::allowed_character_pattern")]
    pub allowed_pattern: String,

    #[serde(default)]
    pub keys: KeyToggles,
}

impl TextFieldStyle {
    /// Normal (non-caret) colors as a pair.
    pub fn colors(&self) -> ColorPair {
        ColorPair::new(self.foreground, self.background)
    }

    /// Caret colors as a pair.
    pub fn caret_colors(&self) -> ColorPair {
        ColorPair::new(self.caret_foreground, self.caret_background)
    }
}

impl Default for TextFieldStyle {
    fn default() -> Self {
        Self {
            foreground: crate::defaults::text_field_foreground(),
            background: crate::defaults::text_field_background(),
            caret_foreground: crate::defaults::text_field_caret_foreground(),
            caret_background: crate::defaults::text_field_caret_background(),
            allowed_pattern: crate::defaults::allowed_character_pattern(),
            keys: KeyToggles::default(),
        }
    }
}
