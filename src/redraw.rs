//! Redraw notifications.
//!
//! Cells and widgets never paint on their own. When something visible
//! changes they post a [`RedrawRequest`] and whoever owns the render loop
//! drains the channel and repaints. Sending never blocks and never fails;
//! a request posted after the receiver is gone is simply dropped.

use tokio::sync::mpsc;

/// Why a repaint was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedrawRequest {
    /// A blink timer toggled a cell's hidden flag.
    BlinkTick,
    /// A widget changed its colors, text or caret.
    WidgetChanged,
}

/// Sending half of the redraw channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct RedrawSender {
    tx: mpsc::UnboundedSender<RedrawRequest>,
}

impl RedrawSender {
    /// Post a request. Fire-and-forget.
    pub fn request(&self, request: RedrawRequest) {
        if self.tx.send(request).is_err() {
            log::trace!("Redraw receiver gone, dropping {request:?}");
        }
    }
}

/// Receiving half of the redraw channel, held by the render loop.
#[derive(Debug)]
pub struct RedrawReceiver {
    rx: mpsc::UnboundedReceiver<RedrawRequest>,
}

impl RedrawReceiver {
    /// Wait for the next request. `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<RedrawRequest> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<RedrawRequest> {
        self.rx.try_recv().ok()
    }

    /// Take every request queued so far without waiting.
    pub fn drain(&mut self) -> Vec<RedrawRequest> {
        std::iter::from_fn(|| self.rx.try_recv().ok()).collect()
    }
}

/// Create a connected sender/receiver pair.
pub fn redraw_channel() -> (RedrawSender, RedrawReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RedrawSender { tx }, RedrawReceiver { rx })
}
