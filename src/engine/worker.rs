//! Per-worker driver: parses each assigned file and runs the analysis function.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::replay::ReplayParser;
use crate::scan::FileEntry;

/// Drains `queue` in order, parsing each file and invoking `crunch_func` on
/// success. `processed_count` is incremented after every attempt, success or
/// failure, so the driver's progress poll always converges.
///
/// The original tool's `worker_func` only popped the queue (and only
/// incremented its counter) on a successful parse, so a single unparsable
/// file looped its worker forever. This always advances past the current
/// file regardless of outcome.
pub fn run_worker<P, R>(
    queue: Vec<FileEntry>,
    crunch_func: &dyn Fn(P) -> R,
    processed_count: &Arc<AtomicUsize>,
) -> Vec<Option<R>>
where
    P: ReplayParser,
{
    let mut results = Vec::with_capacity(queue.len());

    for entry in queue {
        let mut parser = P::new(0);
        let did_load = parser.load(entry.as_path());
        let success = did_load && parser.replay().errors == 0;

        if success {
            results.push(Some(crunch_func(parser)));
        } else {
            results.push(None);
        }

        processed_count.fetch_add(1, Ordering::SeqCst);
    }

    results
}
