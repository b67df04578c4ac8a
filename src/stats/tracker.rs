use std::sync::{Condvar, Mutex};

/// Counts outstanding workers so the dispatcher can detect "all done".
///
/// Initialized to the worker count; each worker decrements exactly once as
/// its final action, success or failure. The dispatcher blocks on the condvar
/// instead of polling the counter in a loop.
#[derive(Debug)]
pub struct CompletionTracker {
    remaining: Mutex<usize>,
    all_done: Condvar,
}

impl CompletionTracker {
    pub fn new(workers: usize) -> Self {
        Self {
            remaining: Mutex::new(workers),
            all_done: Condvar::new(),
        }
    }

    /// Record one worker's termination. The last signal wakes the dispatcher.
    pub fn signal_done(&self) {
        let mut remaining = self.remaining.lock().unwrap_or_else(|e| e.into_inner());
        debug_assert!(*remaining > 0, "signal_done called more times than workers");
        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
            self.all_done.notify_all();
        }
    }

    pub fn is_complete(&self) -> bool {
        *self.remaining.lock().unwrap_or_else(|e| e.into_inner()) == 0
    }

    /// Block until every worker has signaled. Returns immediately for zero
    /// workers.
    pub fn wait_complete(&self) {
        let mut remaining = self.remaining.lock().unwrap_or_else(|e| e.into_inner());
        while *remaining > 0 {
            remaining = self
                .all_done
                .wait(remaining)
                .unwrap_or_else(|e| e.into_inner());
        }
    }
}
