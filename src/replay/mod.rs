//! Modeling of the external replay-parsing library's capability set.
//!
//! The actual `.slp` decoder is an opaque external dependency: the core only
//! needs the shape of what it returns. This module expresses that shape as a
//! trait, [`ReplayParser`], so the engine and combo detector stay generic and
//! testable without a real decoder in the dependency tree.

use std::path::Path;

/// Frame offset denoting the first playable frame of a replay, as the
/// original parser library defines it.
pub const LOAD_FRAME: i32 = 0;

/// A single hit event within a player's attack stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    /// Frame the attack landed on. A value `<= 0` marks the sentinel end of
    /// an attack stream.
    pub frame: i32,
    /// Identifies which move was used.
    pub move_id: u8,
    /// Damage dealt by this hit.
    pub damage: u16,
    /// Index into the owning player's `punishes` collection.
    pub punish_id: usize,
}

/// Kill direction recorded on a [`Punish`]. `Neut` and `Last` are sentinel
/// bounds; any value strictly between them counts as a kill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KillDir {
    /// No kill occurred.
    Neut,
    /// Knocked out to the left.
    Left,
    /// Knocked out to the right.
    Right,
    /// Knocked out upward.
    Up,
    /// Knocked out downward.
    Down,
    /// Sentinel upper bound; never a real value.
    Last,
}

/// A contiguous offensive exchange, identified by index into a player's
/// `punishes` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Punish {
    /// Frame the punish began.
    pub start_frame: i32,
    /// Frame the punish ended.
    pub end_frame: i32,
    /// Direction the opponent was killed in, if any.
    pub kill_dir: KillDir,
}

/// Per-player analysis data.
#[derive(Debug, Clone)]
pub struct AnalysisPlayer {
    /// Player tag/netplay code, e.g. `"YOYO#278"`.
    pub tag_code: String,
    /// Attack stream, terminated by a sentinel attack with `frame <= 0`.
    pub attacks: Vec<Attack>,
    /// Punishes referenced by `attacks[..].punish_id`.
    pub punishes: Vec<Punish>,
}

/// Full two-player analysis of one replay.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Per-port analysis, always exactly two entries.
    pub ap: [AnalysisPlayer; 2],
}

/// Replay metadata independent of the attack analysis.
#[derive(Debug, Clone)]
pub struct ReplayMeta {
    /// Absolute path the parser resolved the replay to (may differ from the
    /// path the scanner yielded if the parser canonicalizes it).
    pub original_file: String,
    /// Game start time, ISO-8601 `Z` format.
    pub start_time: String,
    /// First frame present in the replay.
    pub first_frame: i32,
    /// Last frame present in the replay.
    pub last_frame: i32,
    /// Non-zero if the replay carries parse error flags.
    pub errors: u32,
}

/// Capability set the core requires from the external replay parser.
///
/// A worker constructs one parser per file with `new(0)`, calls `load`, and
/// on success calls `analyze`; on failure the file is skipped (see
/// `crate::engine`).
pub trait ReplayParser {
    /// Construct a parser. `flags` is an opaque verbosity/behavior flag the
    /// core always passes as `0`.
    fn new(flags: i32) -> Self
    where
        Self: Sized;

    /// Attempt to load and validate the replay at `path`. Returns `false` on
    /// any parse failure.
    fn load(&mut self, path: &Path) -> bool;

    /// Replay metadata. Only meaningful after a successful `load`.
    fn replay(&self) -> &ReplayMeta;

    /// Run the attack-stream analysis. Only meaningful after a successful
    /// `load`.
    fn analyze(&self) -> Analysis;
}
