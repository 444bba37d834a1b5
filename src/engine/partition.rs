//! Round-robin static partitioning of discovered files across workers.

use crate::scan::FileEntry;

/// Splits `entries` into `worker_count` queues by round-robin: entry at
/// discovery index `i` goes to queue `i % worker_count`, at position
/// `i / worker_count` within that queue.
///
/// This keeps queue sizes within one of each other and makes the inverse
/// mapping (used by [`super::crunch::aggregate`]) a constant-time formula.
pub fn partition_round_robin(entries: Vec<FileEntry>, worker_count: usize) -> Vec<Vec<FileEntry>> {
    assert!(worker_count > 0, "worker_count must be at least 1");

    let mut queues: Vec<Vec<FileEntry>> = (0..worker_count).map(|_| Vec::new()).collect();
    for (i, entry) in entries.into_iter().enumerate() {
        queues[i % worker_count].push(entry);
    }
    queues
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(n: usize) -> Vec<FileEntry> {
        (0..n)
            .map(|i| FileEntry::new(PathBuf::from(format!("{i}.slp"))))
            .collect()
    }

    #[test]
    fn distributes_round_robin() {
        let queues = partition_round_robin(entries(5), 2);
        assert_eq!(queues.len(), 2);
        assert_eq!(queues[0].len(), 3); // 0, 2, 4
        assert_eq!(queues[1].len(), 2); // 1, 3
        assert_eq!(queues[0][0].path, PathBuf::from("0.slp"));
        assert_eq!(queues[0][1].path, PathBuf::from("2.slp"));
        assert_eq!(queues[1][0].path, PathBuf::from("1.slp"));
    }

    #[test]
    fn single_worker_gets_everything_in_order() {
        let queues = partition_round_robin(entries(4), 1);
        assert_eq!(queues.len(), 1);
        assert_eq!(queues[0].len(), 4);
        for (i, entry) in queues[0].iter().enumerate() {
            assert_eq!(entry.path, PathBuf::from(format!("{i}.slp")));
        }
    }

    #[test]
    fn empty_input_yields_empty_queues() {
        let queues = partition_round_robin(entries(0), 3);
        assert_eq!(queues.len(), 3);
        assert!(queues.iter().all(|q| q.is_empty()));
    }

    #[test]
    fn more_workers_than_files() {
        let queues = partition_round_robin(entries(2), 5);
        assert_eq!(queues.iter().filter(|q| !q.is_empty()).count(), 2);
    }
}
