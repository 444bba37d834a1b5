//! Combo detection: groups a player's attack stream into punishes and keeps
//! the ones that clear the admissibility bar (see [`admissibility`]).

mod admissibility;
mod detector;

pub use admissibility::{
    did_kill, highest_single_attack_damage, highest_single_attack_damage_ratio, is_admissible,
    total_damage, total_move_count, unique_move_count,
};
pub use detector::find_combos;

use crate::replay::{Attack, Punish};

/// Metadata about the replay a combo was found in, carried along for
/// serialization (see `crate::serialize`).
#[derive(Debug, Clone)]
pub struct ReplayData {
    /// Absolute path to the replay, as the parser reported it.
    pub absolute_replay_file_path: String,
    /// Game start time, ISO-8601 `Z` format.
    pub timestamp: String,
    /// First frame present in the replay.
    pub first_game_frame: i32,
    /// Last frame present in the replay.
    pub last_game_frame: i32,
}

/// A maximal run of attacks sharing one punish id, with enough context to
/// derive its movie frame range and serialize it.
#[derive(Debug, Clone)]
pub struct Combo {
    /// Attacks making up this combo, in order.
    pub attacks: Vec<Attack>,
    /// The punish this combo's attacks all reference.
    pub punish: Punish,
    /// Replay context the combo was found in.
    pub replay_data: ReplayData,
    /// Frames of padding before the punish's start frame.
    pub intro_frames: i32,
    /// Frames of padding after the punish's end frame.
    pub outro_frames: i32,
}

impl Combo {
    fn clamp_to_game_frames(&self, target_frame: i32) -> i32 {
        target_frame.clamp(
            self.replay_data.first_game_frame,
            self.replay_data.last_game_frame,
        )
    }

    /// First frame of the movie clip covering this combo: the punish's start
    /// frame, minus the replay's load-frame offset, minus `intro_frames`,
    /// clamped to the replay's frame range.
    pub fn movie_start_frame(&self) -> i32 {
        let target = self.punish.start_frame - crate::replay::LOAD_FRAME - self.intro_frames;
        self.clamp_to_game_frames(target)
    }

    /// Last frame of the movie clip covering this combo: the punish's end
    /// frame, minus the replay's load-frame offset, plus `outro_frames`,
    /// clamped to the replay's frame range.
    pub fn movie_end_frame(&self) -> i32 {
        let target = self.punish.end_frame - crate::replay::LOAD_FRAME + self.outro_frames;
        self.clamp_to_game_frames(target)
    }
}
