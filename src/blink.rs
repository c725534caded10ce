//! Blink timers.
//!
//! A blinking cell toggles its `hidden` flag once per period and posts a
//! redraw request. The timer driving it belongs to the cell: replacing,
//! disabling or dropping the cell cancels it.
//!
//! Timer callbacks only hold a weak handle to their cell, and each timer
//! carries an `active` flag that the callback checks under the cell lock.
//! A tick already in flight when the timer is paused, replaced or dropped
//! finds the flag cleared and leaves the cell alone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use glyphgrid_config::{Config, defaults};
use parking_lot::RwLock;

use crate::cell::Cell;
use crate::redraw::{RedrawRequest, RedrawSender};
use crate::scheduler::{CancelToken, Scheduler, TaskCallback};

/// Timer attached to one blinking cell.
pub struct BlinkTimer {
    scheduler: Arc<dyn Scheduler>,
    cell: Weak<RwLock<Cell>>,
    redraw: RedrawSender,
    interval: Duration,
    token: Option<CancelToken>,
    active: Arc<AtomicBool>,
}

impl BlinkTimer {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether ticks are currently scheduled.
    pub fn is_running(&self) -> bool {
        self.token.is_some()
    }

    /// Cancel pending ticks. Returns false if already paused.
    pub(crate) fn pause(&mut self) -> bool {
        let Some(token) = self.token.take() else {
            return false;
        };
        self.active.store(false, Ordering::Release);
        self.scheduler.cancel(token);
        true
    }

    /// Schedule ticks again from now. Returns false if already running.
    pub(crate) fn resume(&mut self) -> bool {
        if self.token.is_some() {
            return false;
        }
        self.schedule();
        true
    }

    /// Each schedule gets its own flag, so ticks of a cancelled schedule
    /// stay inert after a resume.
    fn schedule(&mut self) {
        let active = Arc::new(AtomicBool::new(true));
        self.active = Arc::clone(&active);

        let cell = self.cell.clone();
        let redraw = self.redraw.clone();
        let callback: TaskCallback = Arc::new(move || {
            let Some(cell) = cell.upgrade() else {
                return;
            };
            {
                let mut cell = cell.write();
                if !active.load(Ordering::Acquire) {
                    return;
                }
                let hidden = !cell.is_hidden();
                cell.set_hidden(hidden);
                log::trace!("Blink tick on {:?}, hidden={hidden}", cell.character());
            }
            redraw.request(RedrawRequest::BlinkTick);
        });
        self.token = Some(self.scheduler.schedule(self.interval, true, callback));
    }

    #[cfg(test)]
    fn active_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.active)
    }
}

impl Drop for BlinkTimer {
    fn drop(&mut self) {
        self.pause();
    }
}

impl std::fmt::Debug for BlinkTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlinkTimer")
            .field("interval", &self.interval)
            .field("token", &self.token)
            .finish()
    }
}

/// Everything a cell needs to start blinking: where to schedule ticks, where
/// to post redraws, and the period to fall back on.
#[derive(Clone)]
pub struct BlinkScheduler {
    scheduler: Arc<dyn Scheduler>,
    redraw: RedrawSender,
    default_interval: Duration,
}

impl BlinkScheduler {
    pub fn new(scheduler: Arc<dyn Scheduler>, redraw: RedrawSender) -> Self {
        Self {
            scheduler,
            redraw,
            default_interval: Duration::from_millis(defaults::blink_interval_ms()),
        }
    }

    /// Like [`new`](Self::new), with the fallback period taken from `config`.
    pub fn from_config(
        scheduler: Arc<dyn Scheduler>,
        redraw: RedrawSender,
        config: &Config,
    ) -> Self {
        Self::new(scheduler, redraw).with_default_interval(config.blink_interval_ms)
    }

    /// Set the period used for non-positive requests. Zero is ignored.
    pub fn with_default_interval(mut self, interval_ms: u64) -> Self {
        if interval_ms > 0 {
            self.default_interval = Duration::from_millis(interval_ms);
        }
        self
    }

    pub fn default_interval(&self) -> Duration {
        self.default_interval
    }

    /// Period for a requested interval: non-positive means default.
    pub fn normalize(&self, interval_ms: i64) -> Duration {
        if interval_ms <= 0 {
            self.default_interval
        } else {
            Duration::from_millis(interval_ms as u64)
        }
    }

    pub fn redraw(&self) -> &RedrawSender {
        &self.redraw
    }

    pub fn scheduler(&self) -> &Arc<dyn Scheduler> {
        &self.scheduler
    }

    /// Schedule a running timer for `cell`.
    pub(crate) fn start(&self, cell: Weak<RwLock<Cell>>, interval_ms: i64) -> BlinkTimer {
        let interval = self.normalize(interval_ms);
        log::debug!("Starting blink timer every {interval:?}");
        let mut timer = BlinkTimer {
            scheduler: Arc::clone(&self.scheduler),
            cell,
            redraw: self.redraw.clone(),
            interval,
            token: None,
            active: Arc::new(AtomicBool::new(false)),
        };
        timer.schedule();
        timer
    }
}

impl std::fmt::Debug for BlinkScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlinkScheduler")
            .field("default_interval", &self.default_interval)
            .finish()
    }
}
