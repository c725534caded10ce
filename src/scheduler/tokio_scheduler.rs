use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::{CancelToken, MIN_INTERVAL, Scheduler, TaskCallback};

type TaskMap = Arc<Mutex<HashMap<CancelToken, JoinHandle<()>>>>;

/// Scheduler backed by tokio tasks.
///
/// Each schedule spawns one task on the given runtime. Late ticks are
/// skipped rather than bursted, so a stalled runtime does not make a cell
/// flicker to catch up.
pub struct TokioScheduler {
    handle: Handle,
    tasks: TaskMap,
    next_id: AtomicU64,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            tasks: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Scheduler on the runtime of the calling context, if there is one.
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Number of tasks that have not finished or been cancelled.
    pub fn active_tasks(&self) -> usize {
        self.tasks.lock().len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(
        &self,
        interval: Duration,
        repeating: bool,
        callback: TaskCallback,
    ) -> CancelToken {
        let token = CancelToken::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let period = interval.max(MIN_INTERVAL);
        let tasks = Arc::clone(&self.tasks);

        // Held across spawn so a finished one-shot cannot remove itself
        // before it has been inserted.
        let mut registry = self.tasks.lock();
        let join = self.handle.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                callback();
                if !repeating {
                    break;
                }
            }
            tasks.lock().remove(&token);
        });
        registry.insert(token, join);
        token
    }

    fn cancel(&self, token: CancelToken) {
        let join = self.tasks.lock().remove(&token);
        if let Some(join) = join {
            join.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        let tasks: Vec<_> = self.tasks.lock().drain().collect();
        if !tasks.is_empty() {
            log::debug!("Aborting {} scheduled task(s)", tasks.len());
        }
        for (_, join) in tasks {
            join.abort();
        }
    }
}

impl std::fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("active_tasks", &self.active_tasks())
            .finish()
    }
}
