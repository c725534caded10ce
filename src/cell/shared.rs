use std::sync::{Arc, Weak};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Cell;
use crate::blink::BlinkScheduler;

/// A cell shared between its row, the renderer and its blink timer.
///
/// Cloning the handle shares the same cell. Blink control lives here rather
/// than on [`Cell`] because a timer needs a handle back to the cell it
/// toggles.
#[derive(Clone)]
pub struct SharedCell(Arc<RwLock<Cell>>);

impl SharedCell {
    pub fn new(cell: Cell) -> Self {
        Self(Arc::new(RwLock::new(cell)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Cell> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Cell> {
        self.0.write()
    }

    /// Whether both handles point at the same cell.
    pub fn ptr_eq(&self, other: &SharedCell) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn downgrade(&self) -> Weak<RwLock<Cell>> {
        Arc::downgrade(&self.0)
    }

    /// Start toggling `hidden` every `interval_ms`. A non-positive interval
    /// uses the scheduler's default. Replaces any timer already attached.
    pub fn enable_blink(&self, interval_ms: i64, blink: &BlinkScheduler) {
        let timer = blink.start(self.downgrade(), interval_ms);
        let previous = self.write().blink.replace(timer);
        // Cancelled here, outside the cell lock.
        drop(previous);
    }

    /// Stop the timer but keep it attached. The cell is made visible.
    pub fn pause_blink(&self) {
        let mut cell = self.write();
        if let Some(timer) = cell.blink.as_mut() {
            timer.pause();
            cell.hidden = false;
        }
    }

    /// Restart a paused timer with a fresh period.
    pub fn resume_blink(&self) {
        if let Some(timer) = self.write().blink.as_mut() {
            timer.resume();
        }
    }

    /// Cancel and release the timer. Calling it again does nothing.
    pub fn disable_blink(&self) {
        let timer = self.write().blink.take();
        drop(timer);
    }

    /// Whether a timer is attached and running.
    pub fn is_blinking(&self) -> bool {
        self.read()
            .blink
            .as_ref()
            .is_some_and(|timer| timer.is_running())
    }
}

impl From<Cell> for SharedCell {
    fn from(cell: Cell) -> Self {
        Self::new(cell)
    }
}

impl std::fmt::Debug for SharedCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedCell").field(&*self.read()).finish()
    }
}
