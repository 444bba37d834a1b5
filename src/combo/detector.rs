//! Walks one player's attack stream and groups it into combos.

use crate::config::ComboDetectorConfig;
use crate::replay::{Analysis, ReplayMeta};

use super::{is_admissible, Combo, ReplayData};

/// Finds every admissible combo in `analysis`, using `replay` for frame-range
/// and timestamp context and `config` to select which port is "ours" and how
/// much intro/outro padding to attach.
///
/// Port selection: port 0 if `analysis.ap[0].tag_code == config.player_identity_tag`,
/// else port 1 (mirrors the original tool's hard-coded check, now
/// configurable rather than a baked-in literal).
///
/// The attack loop stops at the first sentinel attack (`frame <= 0`) without
/// finalizing whatever combo was being built at that point: a trailing,
/// still-open run is dropped rather than emitted. This preserves the
/// original tool's observed behavior deliberately, not a bug to be fixed
/// here.
pub fn find_combos(
    analysis: &Analysis,
    replay: &ReplayMeta,
    config: &ComboDetectorConfig,
) -> Vec<Combo> {
    let port = if analysis.ap[0].tag_code == config.player_identity_tag {
        0
    } else {
        1
    };
    let player = &analysis.ap[port];

    let replay_data = ReplayData {
        absolute_replay_file_path: replay.original_file.clone(),
        timestamp: replay.start_time.clone(),
        first_game_frame: replay.first_frame,
        last_game_frame: replay.last_frame,
    };

    let mut combos = Vec::new();
    let mut building: Vec<crate::replay::Attack> = Vec::new();

    for attack in &player.attacks {
        if attack.frame <= 0 {
            break;
        }

        if let Some(last) = building.last() {
            if attack.punish_id != last.punish_id {
                let punish = player.punishes[last.punish_id];
                if is_admissible(&building, &punish) {
                    combos.push(Combo {
                        attacks: building.clone(),
                        punish,
                        replay_data: replay_data.clone(),
                        intro_frames: config.intro_frames,
                        outro_frames: config.outro_frames,
                    });
                }
                building.clear();
            }
        }

        building.push(*attack);
    }

    combos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::{Attack, AnalysisPlayer, KillDir, Punish};

    fn meta() -> ReplayMeta {
        ReplayMeta {
            original_file: "D:\\games\\x.slp".to_string(),
            start_time: "2024-03-07T15:04:09Z".to_string(),
            first_frame: -123,
            last_frame: 9000,
            errors: 0,
        }
    }

    fn attack(frame: i32, punish_id: usize, damage: u16) -> Attack {
        Attack {
            frame,
            move_id: (punish_id % 255) as u8,
            damage,
            punish_id,
        }
    }

    #[test]
    fn happy_path_emits_one_admissible_combo() {
        let mut attacks: Vec<Attack> = (1..=7).map(|f| attack(f, 1, 10)).collect();
        attacks.push(attack(-1, 2, 0)); // sentinel, ends stream

        let analysis = Analysis {
            ap: [
                AnalysisPlayer {
                    tag_code: "YOYO#278".to_string(),
                    attacks,
                    punishes: vec![
                        Punish {
                            start_frame: 0,
                            end_frame: 0,
                            kill_dir: KillDir::Neut,
                        },
                        Punish {
                            start_frame: 1,
                            end_frame: 7,
                            kill_dir: KillDir::Up,
                        },
                    ],
                },
                AnalysisPlayer {
                    tag_code: "other".to_string(),
                    attacks: vec![],
                    punishes: vec![],
                },
            ],
        };

        let config = ComboDetectorConfig::default();
        let combos = find_combos(&analysis, &meta(), &config);

        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].attacks.len(), 7);
        assert_eq!(combos[0].punish.kill_dir, KillDir::Up);
    }

    #[test]
    fn trailing_combo_is_never_finalized() {
        let attacks: Vec<Attack> = (1..=7).map(|f| attack(f, 1, 10)).collect();
        // no sentinel appended: the original C++ loop condition requires the
        // stream to literally run out via a non-positive frame, so in this
        // test we still terminate with one, but the trailing group (punish_id
        // 1) is still "in progress" when it hits the sentinel below.
        let mut attacks = attacks;
        attacks.push(attack(-1, 2, 0));

        let analysis = Analysis {
            ap: [
                AnalysisPlayer {
                    tag_code: "YOYO#278".to_string(),
                    attacks,
                    punishes: vec![
                        Punish {
                            start_frame: 1,
                            end_frame: 7,
                            kill_dir: KillDir::Up,
                        },
                        Punish {
                            start_frame: 0,
                            end_frame: 0,
                            kill_dir: KillDir::Neut,
                        },
                    ],
                },
                AnalysisPlayer {
                    tag_code: "other".to_string(),
                    attacks: vec![],
                    punishes: vec![],
                },
            ],
        };

        // Only one punish id change ever happens (1 -> 2), so exactly one
        // combo (the first run) is evaluated and the sentinel's own
        // "combo" (punish_id 2, zero attacks) never gets built or finalized.
        let config = ComboDetectorConfig::default();
        let combos = find_combos(&analysis, &meta(), &config);
        assert_eq!(combos.len(), 1);
    }

    #[test]
    fn port_selection_uses_configured_identity_tag() {
        let attacks_p0 = vec![attack(-1, 0, 0)];
        let attacks_p1: Vec<Attack> = (1..=7).map(|f| attack(f, 1, 10)).collect();
        let mut attacks_p1 = attacks_p1;
        attacks_p1.push(attack(-1, 2, 0));

        let analysis = Analysis {
            ap: [
                AnalysisPlayer {
                    tag_code: "someone_else".to_string(),
                    attacks: attacks_p0,
                    punishes: vec![Punish {
                        start_frame: 0,
                        end_frame: 0,
                        kill_dir: KillDir::Neut,
                    }],
                },
                AnalysisPlayer {
                    tag_code: "YOYO#278".to_string(),
                    attacks: attacks_p1,
                    punishes: vec![
                        Punish {
                            start_frame: 1,
                            end_frame: 7,
                            kill_dir: KillDir::Up,
                        },
                        Punish {
                            start_frame: 0,
                            end_frame: 0,
                            kill_dir: KillDir::Neut,
                        },
                    ],
                },
            ],
        };

        let config = ComboDetectorConfig::default();
        let combos = find_combos(&analysis, &meta(), &config);
        assert_eq!(combos.len(), 1);
    }
}
