//! The crunch engine: spawns workers over a static partition, polls progress,
//! and aggregates results back into discovery order.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::error::{CrunchError, Result};
use crate::replay::ReplayParser;
use crate::scan::{self, FileEntry};

use super::params::CrunchParams;
use super::partition::partition_round_robin;
use super::worker::run_worker;

/// Runs `params.crunch_func` over every eligible replay found under
/// `directory`, scanning recursively or not per `recursive`.
pub fn crunch_directory<P, R>(
    params: &CrunchParams<P, R>,
    directory: &Path,
    recursive: bool,
) -> Result<Vec<Option<R>>>
where
    P: ReplayParser + Send + 'static,
    R: Send + 'static,
{
    let entries = scan::discover(directory, recursive)?;
    crunch_files(params, entries)
}

/// Runs `params.crunch_func` over an already-discovered set of files,
/// preserving `entries`' order in the returned vector.
pub fn crunch_files<P, R>(
    params: &CrunchParams<P, R>,
    entries: Vec<FileEntry>,
) -> Result<Vec<Option<R>>>
where
    P: ReplayParser + Send + 'static,
    R: Send + 'static,
{
    let crunch_func = params.func()?;
    let progress = params.progress();
    let interval = params.interval();
    let worker_count = params.worker_count();
    let total_file_count = entries.len();

    let queues = partition_round_robin(entries, worker_count);
    let queue_lens: Vec<usize> = queues.iter().map(|q| q.len()).collect();

    let counters: Vec<Arc<AtomicUsize>> = (0..worker_count)
        .map(|_| Arc::new(AtomicUsize::new(0)))
        .collect();

    let handles: Vec<thread::JoinHandle<Vec<Option<R>>>> = queues
        .into_iter()
        .zip(counters.iter().cloned())
        .map(|(queue, counter)| {
            let crunch_func = Arc::clone(&crunch_func);
            thread::spawn(move || run_worker::<P, R>(queue, crunch_func.as_ref(), &counter))
        })
        .collect();

    if let Some(report) = progress {
        loop {
            let processed: usize = counters.iter().map(|c| c.load(Ordering::SeqCst)).sum();
            report(processed, total_file_count);
            // `processed` alone isn't a reliable exit condition: a worker that
            // panics inside `crunch_func` stops incrementing its counter
            // before it can ever reach `total_file_count`. Also check each
            // thread's actual liveness so a panicked worker still unblocks
            // this loop and its failure surfaces at `join()` below.
            let all_finished = handles.iter().all(|h| h.is_finished());
            if processed >= total_file_count || all_finished {
                break;
            }
            thread::sleep(interval);
        }
    }

    let mut per_worker_results: Vec<Vec<Option<R>>> = Vec::with_capacity(worker_count);
    for handle in handles {
        match handle.join() {
            Ok(results) => per_worker_results.push(results),
            Err(payload) => {
                return Err(CrunchError::Analysis(format!(
                    "crunch worker panicked: {}",
                    panic_message(&payload)
                )));
            }
        }
    }

    Ok(aggregate(per_worker_results, &queue_lens, total_file_count))
}

/// Extracts a human-readable message from a caught worker panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send + 'static)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Reassembles per-worker result vectors into discovery order: the j-th
/// result of worker k occupies global index `j * worker_count + k`.
fn aggregate<R>(
    per_worker_results: Vec<Vec<Option<R>>>,
    queue_lens: &[usize],
    total_file_count: usize,
) -> Vec<Option<R>> {
    let worker_count = per_worker_results.len();
    let mut slots: Vec<Option<Option<R>>> = (0..total_file_count).map(|_| None).collect();

    for (k, mut results) in per_worker_results.into_iter().enumerate() {
        debug_assert_eq!(results.len(), queue_lens[k]);
        for (j, result) in results.drain(..).enumerate() {
            slots[j * worker_count + k] = Some(result);
        }
    }

    slots
        .into_iter()
        .map(|s| s.expect("every slot is filled by exactly one worker"))
        .collect()
}
