//! Clickable button.
//!
//! # State machine
//!
//! ```text
//!            pointer enters              primary press inside
//!   Normal ─────────────────▶ Hovered ─────────────────────────▶ Pressed
//!     ▲  ◀──────────────────    │  ▲                                │
//!     │     pointer leaves      │  └──── release, still inside ─────┤
//!     └─────────────────────────┴─────── release, outside ──────────┘
//! ```
//!
//! Enter and leave are detected from consecutive hover moves. Moves with the
//! primary button held are drags and leave the state alone. Every
//! transition is guarded: asking for the state the button is already in
//! changes nothing and posts no redraw. Releasing the primary button while
//! `Pressed` always fires the click handler, wherever the pointer is.

use glyphgrid_config::{ButtonStyle, ColorPair, Config};

use super::{Widget, hit_test};
use crate::blink::BlinkScheduler;
use crate::input::{InputEvent, MouseButton};
use crate::redraw::{RedrawRequest, RedrawSender};
use crate::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

/// Called once per completed click.
pub type ClickHandler = Box<dyn FnMut() + Send>;

/// A label between two delimiter cells, e.g. `<OK>`.
pub struct Button {
    row: Row,
    column: u32,
    row_index: u32,
    state: ButtonState,
    pointer_inside: bool,
    style: ButtonStyle,
    on_click: ClickHandler,
    redraw: RedrawSender,
}

impl Button {
    /// Button with `label` whose first cell sits at `(column, row_index)`.
    pub fn new(
        label: &str,
        column: u32,
        row_index: u32,
        style: ButtonStyle,
        redraw: RedrawSender,
        on_click: impl FnMut() + Send + 'static,
    ) -> Self {
        let text: String = std::iter::once(style.starting_character)
            .chain(label.chars())
            .chain(std::iter::once(style.ending_character))
            .collect();
        let row = Row::from_text(&text);
        row.set_colors(.., style.normal);

        Self {
            row,
            column,
            row_index,
            state: ButtonState::Normal,
            pointer_inside: false,
            style,
            on_click: Box::new(on_click),
            redraw,
        }
    }

    /// Button styled by `config.button`, with cells carrying
    /// `config.underline_thickness`.
    pub fn from_config(
        label: &str,
        column: u32,
        row_index: u32,
        config: &Config,
        redraw: RedrawSender,
        on_click: impl FnMut() + Send + 'static,
    ) -> Self {
        let button = Self::new(label, column, row_index, config.button.clone(), redraw, on_click);
        button
            .row
            .set_underline_thickness(.., config.underline_thickness);
        button
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// The text between the delimiters.
    pub fn label(&self) -> String {
        let text = self.row.text();
        let mut chars = text.chars();
        chars.next();
        chars.next_back();
        chars.collect()
    }

    pub fn starting_character(&self) -> char {
        self.style.starting_character
    }

    pub fn ending_character(&self) -> char {
        self.style.ending_character
    }

    pub fn set_starting_character(&mut self, character: char) {
        self.style.starting_character = character;
        self.row.set_character(0, character);
        self.request_redraw();
    }

    pub fn set_ending_character(&mut self, character: char) {
        self.style.ending_character = character;
        self.row.set_character(self.row.len() - 1, character);
        self.request_redraw();
    }

    pub fn set_normal_colors(&mut self, colors: ColorPair) {
        self.style.normal = colors;
        self.refresh_if(ButtonState::Normal);
    }

    pub fn set_hovered_colors(&mut self, colors: ColorPair) {
        self.style.hovered = colors;
        self.refresh_if(ButtonState::Hovered);
    }

    pub fn set_pressed_colors(&mut self, colors: ColorPair) {
        self.style.pressed = colors;
        self.refresh_if(ButtonState::Pressed);
    }

    /// Blink the label. Delimiter cells never blink.
    pub fn enable_blink(&self, interval_ms: i64, blink: &BlinkScheduler) {
        self.row.enable_blink(self.label_range(), interval_ms, blink);
    }

    pub fn disable_blink(&self) {
        self.row.disable_blink(self.label_range());
    }

    fn label_range(&self) -> std::ops::Range<usize> {
        1..self.row.len().saturating_sub(1)
    }

    fn colors_for(&self, state: ButtonState) -> ColorPair {
        match state {
            ButtonState::Normal => self.style.normal,
            ButtonState::Hovered => self.style.hovered,
            ButtonState::Pressed => self.style.pressed,
        }
    }

    fn refresh_if(&self, state: ButtonState) {
        if self.state == state {
            self.row.set_colors(.., self.colors_for(state));
            self.request_redraw();
        }
    }

    /// Move to `target` unless already there. Returns whether it moved.
    fn transition(&mut self, target: ButtonState) -> bool {
        if self.state == target {
            return false;
        }
        log::debug!("Button {:?}: {:?} -> {:?}", self.label(), self.state, target);
        self.state = target;
        self.row.set_colors(.., self.colors_for(target));
        self.request_redraw();
        true
    }

    fn request_redraw(&self) {
        self.redraw.request(RedrawRequest::WidgetChanged);
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        hit_test(&self.row, x, y)
    }
}

impl Widget for Button {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::MouseMove { x, y, button } => {
                let inside = self.contains(x, y);
                let was_inside = std::mem::replace(&mut self.pointer_inside, inside);
                // Drags never change state; a pressed button stays pressed
                // until the release.
                if button == Some(MouseButton::Primary) || self.state == ButtonState::Pressed {
                    return false;
                }
                match (was_inside, inside) {
                    (false, true) => self.transition(ButtonState::Hovered),
                    (true, false) => self.transition(ButtonState::Normal),
                    _ => false,
                }
            }
            InputEvent::MousePress {
                x,
                y,
                button: MouseButton::Primary,
            } => {
                self.pointer_inside = self.contains(x, y);
                self.pointer_inside && self.transition(ButtonState::Pressed)
            }
            InputEvent::MouseRelease {
                x,
                y,
                button: MouseButton::Primary,
            } => {
                let clicked = self.state == ButtonState::Pressed;
                if clicked {
                    (self.on_click)();
                }
                self.pointer_inside = self.contains(x, y);
                let moved = if self.pointer_inside {
                    self.transition(ButtonState::Hovered)
                } else {
                    self.transition(ButtonState::Normal)
                };
                clicked || moved
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

impl Drop for Button {
    fn drop(&mut self) {
        self.row.disable_blink(..);
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label())
            .field("state", &self.state)
            .field("origin", &(self.column, self.row_index))
            .finish()
    }
}
