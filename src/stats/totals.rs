use std::sync::Mutex;

use super::worker::FileCounts;

/// Aggregate line/word/character counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub lines: u64,
    pub words: u64,
    pub chars: u64,
}

/// The single aggregate of counts across all inputs.
///
/// Created once by the dispatcher and handed to every worker; workers mutate
/// it only through `merge`, which takes the lock for the whole read-modify-
/// write so concurrent merges can neither lose nor double-count updates.
#[derive(Debug, Default)]
pub struct SharedTotals {
    inner: Mutex<Counts>,
}

impl SharedTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one worker's counts into the totals. Called at most once per worker.
    pub fn merge(&self, counts: &FileCounts) {
        let mut totals = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        totals.lines += counts.lines;
        totals.words += counts.words;
        totals.chars += counts.chars;
    }

    /// Read the current totals. Taken under the same lock even though the
    /// dispatcher only reads after all workers have signaled completion.
    pub fn snapshot(&self) -> Counts {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
