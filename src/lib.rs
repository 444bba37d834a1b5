//! Slippcrunch
//!
//! A parallel batch analytics engine for game-replay (`.slp`) files, built
//! around a generic "crunch" engine: given a directory, a per-file analysis
//! function, and an optional progress callback, it discovers eligible
//! replays, distributes them across a pool of worker threads, parses each
//! one, invokes the analysis function, and returns a result vector in
//! discovery order with per-file failures represented as `None`.
//!
//! A combo detector is layered on top as the canonical analysis function: it
//! walks a parsed replay's attack stream, groups attacks into punishes,
//! applies an admissibility predicate, and serializes admissible combos to
//! the JSON shape a downstream overlay-rendering tool expects.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use slippcrunch::combo;
//! use slippcrunch::config::ComboDetectorConfig;
//! use slippcrunch::engine::{crunch_directory, CrunchParams};
//! use slippcrunch::progress::bar_reporter;
//! use std::path::Path;
//!
//! let detector_config = ComboDetectorConfig::default();
//!
//! let params = CrunchParams::new()
//!     .crunch_func(move |parser: MyReplayParser| {
//!         combo::find_combos(&parser.analyze(), parser.replay(), &detector_config)
//!     })
//!     .progress_report_func(bar_reporter());
//!
//! let results = crunch_directory(&params, Path::new("./replays"), true)?;
//! ```
//!
//! Replace `MyReplayParser` with a real implementation of
//! [`replay::ReplayParser`] -- the `.slp` decoder itself is an opaque external
//! dependency this crate only models the shape of (see `replay`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod combo;
pub mod config;
pub mod engine;
pub mod error;
pub mod progress;
pub mod replay;
pub mod scan;
pub mod serialize;

pub use combo::Combo;
pub use config::{ComboDetectorConfig, CrunchConfig, SerializerConfig};
pub use engine::{crunch_directory, crunch_files, CrunchParams};
pub use error::{CrunchError, Result};
pub use replay::{Analysis, AnalysisPlayer, Attack, KillDir, Punish, ReplayParser, LOAD_FRAME};
pub use scan::FileEntry;

/// Library version information.
pub mod version {
    /// Library version string.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Library name.
    pub const NAME: &str = env!("CARGO_PKG_NAME");

    /// Get full version string.
    pub fn full_version() -> String {
        format!("{} {}", NAME, VERSION)
    }
}
