//! Single-line text entry with a scrolling viewport.
//!
//! The field keeps a fixed-length backing buffer of `max_characters` and
//! shows a window of `visible_width` cells onto it. Two carets track the
//! insertion point:
//!
//! - the actual caret, an index into the buffer
//! - the visual caret, an index into the visible cells
//!
//! The window always starts at `actual - visual`. Both carets clamp at their
//! own upper bound instead of wrapping, so near the ends of a long buffer
//! they can move independently and the window scrolls.
//!
//! The cell under the visual caret wears the caret colors and is the only
//! blinking cell in the row.

use std::sync::Arc;

use glyphgrid_config::{ColorPair, Config, KeyToggles, TextFieldStyle, defaults};
use regex::Regex;

use super::{Widget, hit_test};
use crate::blink::BlinkScheduler;
use crate::error::{Result, SurfaceError};
use crate::input::{InputEvent, KeyCode, MouseButton};
use crate::redraw::RedrawRequest;
use crate::row::Row;

/// Decides whether a typed character is accepted.
pub type CharFilter = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Filter accepting characters whose one-character string matches `pattern`.
pub fn pattern_filter(pattern: &str) -> std::result::Result<CharFilter, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(Arc::new(move |c: char| {
        let mut buf = [0u8; 4];
        regex.is_match(c.encode_utf8(&mut buf))
    }))
}

pub struct TextField {
    row: Row,
    column: u32,
    row_index: u32,
    buffer: Vec<char>,
    actual_caret: usize,
    visual_caret: usize,
    colors: ColorPair,
    caret_colors: ColorPair,
    keys: KeyToggles,
    allowed: CharFilter,
    blink: BlinkScheduler,
    focused: bool,
}

impl TextField {
    /// Empty field of `visible_width` cells over a `max_characters` buffer.
    ///
    /// Fails if `visible_width` is zero or larger than `max_characters`.
    pub fn new(
        visible_width: usize,
        max_characters: usize,
        column: u32,
        row_index: u32,
        style: &TextFieldStyle,
        allowed: CharFilter,
        blink: BlinkScheduler,
    ) -> Result<Self> {
        if visible_width == 0 {
            return Err(SurfaceError::InvalidArgument(
                "text field width must be at least 1".to_string(),
            ));
        }
        if max_characters < visible_width {
            return Err(SurfaceError::InvalidArgument(format!(
                "text field holds {max_characters} characters but shows {visible_width}"
            )));
        }

        let row = Row::blank(visible_width);
        row.set_colors(.., style.colors());

        let field = Self {
            row,
            column,
            row_index,
            buffer: vec![' '; max_characters],
            actual_caret: 0,
            visual_caret: 0,
            colors: style.colors(),
            caret_colors: style.caret_colors(),
            keys: style.keys,
            allowed,
            blink,
            focused: false,
        };
        field.claim_caret_cell(0);
        Ok(field)
    }

    /// Field styled by `config.text_field`, with cells carrying
    /// `config.underline_thickness`. An invalid allowed-character
    /// pattern falls back to the default one.
    pub fn from_config(
        visible_width: usize,
        max_characters: usize,
        column: u32,
        row_index: u32,
        config: &Config,
        blink: BlinkScheduler,
    ) -> Result<Self> {
        let style = &config.text_field;
        let allowed = match pattern_filter(&style.allowed_pattern) {
            Ok(filter) => filter,
            Err(e) => {
                log::warn!(
                    "Invalid text field pattern {:?}, using default: {e}",
                    style.allowed_pattern
                );
                pattern_filter(&defaults::allowed_character_pattern()).map_err(|e| {
                    SurfaceError::InvalidArgument(format!("default pattern rejected: {e}"))
                })?
            }
        };
        let field = Self::new(
            visible_width,
            max_characters,
            column,
            row_index,
            style,
            allowed,
            blink,
        )?;
        field
            .row
            .set_underline_thickness(.., config.underline_thickness);
        Ok(field)
    }

    pub fn visible_width(&self) -> usize {
        self.row.len()
    }

    pub fn max_characters(&self) -> usize {
        self.buffer.len()
    }

    pub fn actual_caret(&self) -> usize {
        self.actual_caret
    }

    pub fn visual_caret(&self) -> usize {
        self.visual_caret
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            log::debug!("Text field focus -> {focused}");
            self.focused = focused;
        }
    }

    pub fn keys(&self) -> KeyToggles {
        self.keys
    }

    pub fn set_keys(&mut self, keys: KeyToggles) {
        self.keys = keys;
    }

    pub fn set_filter(&mut self, allowed: CharFilter) {
        self.allowed = allowed;
    }

    /// The whole backing buffer. Unused positions are spaces.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Replace the buffer contents from index 0. Longer text is truncated;
    /// empty text clears the field. Carets stay where they are.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.fill(' ');
        for (slot, c) in self.buffer.iter_mut().zip(text.chars()) {
            *slot = c;
        }
        self.refresh_display();
        self.request_redraw();
    }

    pub fn clear_text(&mut self) {
        self.buffer.fill(' ');
        self.refresh_display();
        self.request_redraw();
    }

    /// Type `character` at the caret. Rejected characters change nothing.
    ///
    /// Returns whether the character was accepted.
    pub fn type_char(&mut self, character: char) -> bool {
        if !(self.allowed)(character) {
            log::trace!("Text field rejected {character:?}");
            return false;
        }
        self.buffer[self.actual_caret] = character;
        self.move_carets_right();
        self.refresh_display();
        self.request_redraw();
        true
    }

    /// Apply an editing key. Disabled and unknown keys change nothing.
    ///
    /// Returns whether the key was handled.
    pub fn apply_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Home if self.keys.home => {
                self.actual_caret = 0;
                self.move_visual_caret(0);
            }
            KeyCode::End if self.keys.end => {
                self.actual_caret = self.max_characters() - 1;
                self.move_visual_caret(self.visible_width() - 1);
            }
            KeyCode::Delete if self.keys.delete => {
                self.buffer[self.actual_caret] = ' ';
            }
            KeyCode::Left if self.keys.left_arrow => {
                self.actual_caret = self.actual_caret.saturating_sub(1);
                self.move_visual_caret(self.visual_caret.saturating_sub(1));
            }
            KeyCode::Right if self.keys.right_arrow => {
                self.move_carets_right();
            }
            KeyCode::Backspace if self.keys.backspace => {
                let at_end = self.actual_caret == self.max_characters() - 1;
                if !(at_end && self.buffer[self.actual_caret] != ' ') {
                    self.actual_caret = self.actual_caret.saturating_sub(1);
                    self.move_visual_caret(self.visual_caret.saturating_sub(1));
                }
                self.buffer[self.actual_caret] = ' ';
            }
            _ => return false,
        }
        log::debug!(
            "Text field {key:?}: actual={} visual={}",
            self.actual_caret,
            self.visual_caret
        );
        self.refresh_display();
        self.request_redraw();
        true
    }

    fn move_carets_right(&mut self) {
        self.actual_caret = (self.actual_caret + 1).min(self.max_characters() - 1);
        self.move_visual_caret(self.visual_caret + 1);
    }

    /// Move the caret highlight and blink to `index`, clamped to the row.
    fn move_visual_caret(&mut self, index: usize) {
        let index = index.min(self.visible_width() - 1);
        if index == self.visual_caret {
            return;
        }
        self.release_caret_cell(self.visual_caret);
        self.visual_caret = index;
        self.claim_caret_cell(index);
    }

    fn release_caret_cell(&self, index: usize) {
        if let Some(cell) = self.row.cell(index) {
            cell.disable_blink();
            let mut cell = cell.write();
            cell.set_hidden(false);
            cell.set_colors(self.colors.foreground, self.colors.background);
        }
    }

    fn claim_caret_cell(&self, index: usize) {
        if let Some(cell) = self.row.cell(index) {
            cell.write()
                .set_colors(self.caret_colors.foreground, self.caret_colors.background);
            cell.enable_blink(0, &self.blink);
        }
    }

    /// Copy the window `buffer[actual - visual ..][..visible_width]` into
    /// the row.
    fn refresh_display(&self) {
        let offset = self.actual_caret.saturating_sub(self.visual_caret);
        let window = self.buffer.iter().skip(offset).copied();
        let text: String = window
            .chain(std::iter::repeat(' '))
            .take(self.visible_width())
            .collect();
        self.row.write_text(&text);
    }

    fn request_redraw(&self) {
        self.blink.redraw().request(RedrawRequest::WidgetChanged);
    }
}

impl Widget for TextField {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::CharTyped(c) if self.focused => self.type_char(c),
            InputEvent::KeyAction(key) if self.focused => self.apply_key(key),
            InputEvent::MousePress {
                x,
                y,
                button: MouseButton::Primary,
            } => {
                let inside = hit_test(&self.row, x, y);
                self.set_focused(inside);
                inside
            }
            _ => false,
        }
    }

    fn row(&self) -> &Row {
        &self.row
    }

    fn origin(&self) -> (u32, u32) {
        (self.column, self.row_index)
    }
}

impl Drop for TextField {
    fn drop(&mut self) {
        self.row.disable_blink(..);
    }
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextField")
            .field("text", &self.text())
            .field("actual_caret", &self.actual_caret)
            .field("visual_caret", &self.visual_caret)
            .field("focused", &self.focused)
            .finish()
    }
}
