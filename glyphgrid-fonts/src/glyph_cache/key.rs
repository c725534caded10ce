use glyphgrid_config::Color;

/// Everything that changes the pixels of a colored glyph.
///
/// Underline and bounding box are painted separately and hidden state is
/// folded into the colors by [`GlyphKey::for_cell`], so neither is part of
/// the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    pub character: char,
    pub foreground: Color,
    pub background: Color,
    pub flipped_horizontally: bool,
    pub flipped_vertically: bool,
}

impl GlyphKey {
    pub fn new(character: char, foreground: Color, background: Color) -> Self {
        Self {
            character,
            foreground,
            background,
            flipped_horizontally: false,
            flipped_vertically: false,
        }
    }

    pub fn flipped(mut self, horizontally: bool, vertically: bool) -> Self {
        self.flipped_horizontally = horizontally;
        self.flipped_vertically = vertically;
        self
    }

    /// Key to paint a cell with. A hidden cell draws its ink in the
    /// background color; the caller's colors are left untouched.
    pub fn for_cell(
        character: char,
        foreground: Color,
        background: Color,
        hidden: bool,
        flipped_horizontally: bool,
        flipped_vertically: bool,
    ) -> Self {
        let foreground = if hidden { background } else { foreground };
        Self {
            character,
            foreground,
            background,
            flipped_horizontally,
            flipped_vertically,
        }
    }
}
