use std::thread;

use super::totals::{Counts, SharedTotals};
use super::tracker::CompletionTracker;
use super::worker::{process_input, Input};

/// Spawn one worker thread per input, wait for all of them, and return the
/// merged totals.
///
/// Per-input report lines are printed by the workers as they finish, in
/// scheduling order. The returned snapshot is taken strictly after the
/// tracker reaches zero, and each worker merges before it signals, so the
/// totals are complete. Zero inputs spawn no workers and return zeros.
pub fn run(names: &[String]) -> Counts {
    let totals = SharedTotals::new();
    let tracker = CompletionTracker::new(names.len());

    thread::scope(|s| {
        for (index, name) in names.iter().enumerate() {
            let input = Input {
                name: name.clone(),
                index,
            };
            let totals = &totals;
            let tracker = &tracker;
            s.spawn(move || worker_main(input, totals, tracker));
        }
        tracker.wait_complete();
    });

    totals.snapshot()
}

/// One worker's whole lifecycle: count, report, merge, signal — in that
/// order. An unopenable input reports to stderr and contributes nothing to
/// the totals, but still signals so the dispatcher never waits forever.
fn worker_main(input: Input, totals: &SharedTotals, tracker: &CompletionTracker) {
    match process_input(&input.name) {
        Ok(counts) => {
            println!(
                "Thread {} {}: {} lines, {} words, {} characters",
                input.index, counts.name, counts.lines, counts.words, counts.chars
            );
            totals.merge(&counts);
        }
        Err(err) => eprintln!("fstats: {err}"),
    }
    tracker.signal_done();
}
