//! Interactive widgets built from a single row of cells.
//!
//! Widgets own their [`Row`] by value and expose a small capability surface
//! through [`Widget`]: take input, report bounds, render. Hit-testing uses
//! the bounding boxes the renderer records, so a widget only reacts to the
//! pointer after it has been painted at least once.

mod button;
mod text_field;

use crate::cell::Rect;
use crate::error::Result;
use crate::input::InputEvent;
use crate::renderer::{PaintSink, Renderer};
use crate::row::Row;

pub use button::{Button, ButtonState, ClickHandler};
pub use text_field::{CharFilter, TextField, pattern_filter};

pub trait Widget {
    /// Feed one event. Returns true if the widget changed in response.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// The cells the widget paints.
    fn row(&self) -> &Row;

    /// Cell coordinate `(column, row)` of the widget's first cell.
    fn origin(&self) -> (u32, u32);

    /// Pixel area covered by the painted cells. `None` before the first
    /// paint.
    fn bounds(&self) -> Option<Rect> {
        let rect = self
            .row()
            .iter()
            .map(|cell| cell.read().bounding_box())
            .fold(Rect::default(), |acc, r| acc.union(&r));
        (!rect.is_empty()).then_some(rect)
    }

    fn render(&self, renderer: &mut Renderer, sink: &mut dyn PaintSink) -> Result<()> {
        let (column, row) = self.origin();
        renderer.paint_row(self.row(), column, row, sink)
    }
}

/// Whether any cell of `row` was last painted over pixel `(x, y)`.
pub(crate) fn hit_test(row: &Row, x: i32, y: i32) -> bool {
    row.iter().any(|cell| cell.read().bounding_box().contains(x, y))
}
