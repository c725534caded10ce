use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{CancelToken, MIN_INTERVAL, Scheduler, TaskCallback};

struct ManualTask {
    due: Duration,
    interval: Duration,
    repeating: bool,
    callback: TaskCallback,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    tasks: HashMap<CancelToken, ManualTask>,
}

/// Scheduler driven by an explicit virtual clock.
///
/// Nothing fires until [`advance`](Self::advance) is called. Due tasks then
/// run in deadline order (ties broken by schedule order) on the caller's
/// thread.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of tasks still scheduled.
    pub fn pending(&self) -> usize {
        self.state.lock().tasks.len()
    }

    pub fn is_scheduled(&self, token: CancelToken) -> bool {
        self.state.lock().tasks.contains_key(&token)
    }

    /// Move the clock forward by `by`, firing every task that comes due.
    ///
    /// Returns the number of callbacks invoked. A repeating task fires once
    /// per elapsed period.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.lock().now + by;
        let mut fired = 0;

        loop {
            let callback = {
                let mut state = self.state.lock();
                let next = state
                    .tasks
                    .iter()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(token, task)| (task.due, **token))
                    .map(|(token, task)| (*token, task.due));

                let Some((token, due)) = next else {
                    state.now = target;
                    break;
                };
                state.now = due;

                let Some(mut task) = state.tasks.remove(&token) else {
                    continue;
                };
                let callback = Arc::clone(&task.callback);
                if task.repeating {
                    task.due += task.interval;
                    state.tasks.insert(token, task);
                }
                callback
            };

            // The lock is released here; callbacks may schedule or cancel.
            callback();
            fired += 1;
        }

        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(
        &self,
        interval: Duration,
        repeating: bool,
        callback: TaskCallback,
    ) -> CancelToken {
        let interval = interval.max(MIN_INTERVAL);
        let mut state = self.state.lock();
        let token = CancelToken::new(state.next_id);
        state.next_id += 1;
        let due = state.now + interval;
        state.tasks.insert(
            token,
            ManualTask {
                due,
                interval,
                repeating,
                callback,
            },
        );
        token
    }

    fn cancel(&self, token: CancelToken) {
        self.state.lock().tasks.remove(&token);
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.tasks.len())
            .finish()
    }
}
