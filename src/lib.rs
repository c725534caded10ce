// Character-cell surface: styled cells, a cached glyph renderer, blink
// timers and two interactive widgets built on top of them.
//
// # Lock Usage Policy
//
// glyphgrid uses `parking_lot` locks only. New code should follow these rules:
//
//   - `parking_lot::RwLock<Cell>`: every cell lives behind one (`SharedCell`).
//                                  Take the write lock per cell operation and
//                                  never call a `SharedCell` method while
//                                  holding a guard to the same cell.
//
//   - `parking_lot::Mutex`:       scheduler bookkeeping only. Schedulers never
//                                  invoke a callback while holding it.
//
//   - Blink timers are dropped (and therefore cancelled) outside the cell lock.
//
// Logging goes through the `log` facade. The library never installs a logger.

/// Library version, for hosts that want to report it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod blink;
pub mod cell;
pub mod error;
pub mod input;
pub mod redraw;
pub mod renderer;
pub mod row;
pub mod scheduler;
pub mod widget;

// Re-export main types for convenience
pub use blink::{BlinkScheduler, BlinkTimer};
pub use cell::{Cell, Rect, SharedCell};
pub use error::{Result, SurfaceError};
pub use input::{InputEvent, InputReceiver, InputSender, KeyCode, MouseButton, input_channel};
pub use redraw::{RedrawReceiver, RedrawRequest, RedrawSender, redraw_channel};
pub use renderer::{CanvasSink, PaintSink, Renderer};
pub use row::{ColorLayer, Row};
pub use scheduler::{CancelToken, ManualScheduler, Scheduler, TaskCallback, TokioScheduler};
pub use widget::{Button, ButtonState, CharFilter, TextField, Widget};

pub use glyphgrid_config::{
    ButtonStyle, Color, ColorPair, Config, ConfigError, KeyToggles, TextFieldStyle,
};
pub use glyphgrid_fonts::{
    GlyphBitmap, GlyphBitmapSource, GlyphCache, GlyphError, GlyphKey, RawGlyph,
    StaticGlyphSource,
};
