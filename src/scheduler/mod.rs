//! Timer scheduling for blink effects.
//!
//! The surface never sleeps or spawns on its own; it asks a [`Scheduler`] to
//! call back later. Two implementations ship with the crate:
//!
//! - [`TokioScheduler`]: one tokio task per schedule, driven by
//!   `tokio::time::interval`
//! - [`ManualScheduler`]: a virtual clock advanced by the host, for headless
//!   hosts and deterministic tests

mod manual;
mod tokio_scheduler;

use std::time::Duration;

pub use manual::ManualScheduler;
pub use tokio_scheduler::TokioScheduler;

/// Callback run on every tick of a scheduled task.
pub type TaskCallback = std::sync::Arc<dyn Fn() + Send + Sync>;

/// Handle identifying one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CancelToken(u64);

impl CancelToken {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Runs callbacks after a delay, once or repeatedly.
pub trait Scheduler: Send + Sync {
    /// Run `callback` after `interval`, and every `interval` after that if
    /// `repeating`. Implementations treat a zero interval as one millisecond.
    fn schedule(&self, interval: Duration, repeating: bool, callback: TaskCallback)
    -> CancelToken;

    /// Stop a task. Unknown or already-finished tokens are ignored.
    fn cancel(&self, token: CancelToken);
}

/// Shortest period a scheduler will run a task at.
pub(crate) const MIN_INTERVAL: Duration = Duration::from_millis(1);
