//! The parallel crunch engine: discovers replay files, statically partitions
//! them across worker threads, and aggregates results back into discovery
//! order.
//!
//! This engine spawns plain `std::thread` workers over queues partitioned
//! once at startup (see [`partition::partition_round_robin`]), rather than a
//! thread pool with dynamic work-stealing. There is no shared queue and no
//! cross-worker synchronization on the hot path; the only shared state is
//! each worker's atomic progress counter.

mod crunch;
mod params;
mod partition;
mod worker;

pub use crunch::{crunch_directory, crunch_files};
pub use params::CrunchParams;
pub use partition::partition_round_robin;
