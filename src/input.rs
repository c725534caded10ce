//! Input events delivered to widgets.
//!
//! The host translates its windowing system's events into [`InputEvent`]s
//! and feeds them to widgets, either directly through
//! [`Widget::handle_input`](crate::widget::Widget::handle_input) or through
//! the ordered channel returned by [`input_channel`].
//!
//! Pointer coordinates are pixels in the same space the renderer paints
//! into. They are signed because a pointer can sit left of or above the
//! surface.

use tokio::sync::mpsc;

/// Editing keys a widget can react to. Anything else arrives as `Other`
/// carrying the host's key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Home,
    End,
    Delete,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    Tab,
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable character was produced.
    CharTyped(char),
    /// An editing key fired. Whether that happens on key-down or key-up is
    /// the host's choice.
    KeyAction(KeyCode),
    MousePress { x: i32, y: i32, button: MouseButton },
    MouseRelease { x: i32, y: i32, button: MouseButton },
    /// The pointer moved. `button` is the button held down during the
    /// move, `None` for a plain hover.
    MouseMove {
        x: i32,
        y: i32,
        button: Option<MouseButton>,
    },
}

/// Sending half of the input channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: mpsc::UnboundedSender<InputEvent>,
}

impl InputSender {
    /// Queue an event. Returns false if the receiver is gone.
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Receiving half of the input channel. Events come out in arrival order.
#[derive(Debug)]
pub struct InputReceiver {
    rx: mpsc::UnboundedReceiver<InputEvent>,
}

impl InputReceiver {
    pub async fn recv(&mut self) -> Option<InputEvent> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<InputEvent> {
        self.rx.try_recv().ok()
    }

    /// Take every queued event without waiting.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::iter::from_fn(|| self.rx.try_recv().ok()).collect()
    }
}

pub fn input_channel() -> (InputSender, InputReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (InputSender { tx }, InputReceiver { rx })
}
