//! Admissibility predicates for a candidate combo.

use crate::replay::{Attack, KillDir, Punish};

const MIN_MOVE_COUNT: usize = 7;
const MIN_TOTAL_DAMAGE: u16 = 60;
const MAX_HIGHEST_ATTACK_RATIO: f32 = 0.25;

/// True iff the punish ended in a kill (a non-sentinel `kill_dir`).
pub fn did_kill(punish: &Punish) -> bool {
    KillDir::Neut < punish.kill_dir && punish.kill_dir < KillDir::Last
}

/// Total number of attacks in the combo.
pub fn total_move_count(attacks: &[Attack]) -> usize {
    attacks.len()
}

/// Number of distinct move ids used in the combo.
pub fn unique_move_count(attacks: &[Attack]) -> usize {
    let mut seen = Vec::new();
    for attack in attacks {
        if !seen.contains(&attack.move_id) {
            seen.push(attack.move_id);
        }
    }
    seen.len()
}

/// Highest single-attack damage in the combo, 0 if empty.
pub fn highest_single_attack_damage(attacks: &[Attack]) -> u16 {
    attacks.iter().map(|a| a.damage).max().unwrap_or(0)
}

/// Sum of damage across the combo, accumulated as `u16` to match the
/// original tool's accumulator width.
pub fn total_damage(attacks: &[Attack]) -> u16 {
    attacks.iter().fold(0u16, |acc, a| acc.wrapping_add(a.damage))
}

/// Ratio of the single highest attack's damage to the combo's total damage.
/// `+inf` when total damage is zero, matching the original's unguarded
/// float division.
pub fn highest_single_attack_damage_ratio(attacks: &[Attack]) -> f32 {
    highest_single_attack_damage(attacks) as f32 / total_damage(attacks) as f32
}

/// True iff the combo satisfies every admissibility clause:
/// the punish killed, the combo has at least 7 attacks, at least 60 total
/// damage, and no single attack accounts for more than 25% of that damage.
pub fn is_admissible(attacks: &[Attack], punish: &Punish) -> bool {
    did_kill(punish)
        && total_move_count(attacks) >= MIN_MOVE_COUNT
        && total_damage(attacks) >= MIN_TOTAL_DAMAGE
        && highest_single_attack_damage_ratio(attacks) <= MAX_HIGHEST_ATTACK_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack(move_id: u8, damage: u16) -> Attack {
        Attack {
            frame: 1,
            move_id,
            damage,
            punish_id: 0,
        }
    }

    fn killing_punish() -> Punish {
        Punish {
            start_frame: 0,
            end_frame: 10,
            kill_dir: KillDir::Up,
        }
    }

    fn seven_attacks_totaling(total: u16) -> Vec<Attack> {
        let per = total / 7;
        let mut attacks: Vec<Attack> = (0..7).map(|i| attack(i, per)).collect();
        let accounted = per * 7;
        attacks[0].damage += total - accounted;
        attacks
    }

    #[test]
    fn happy_path_combo_is_admissible() {
        let attacks = seven_attacks_totaling(70);
        assert!(is_admissible(&attacks, &killing_punish()));
    }

    #[test]
    fn non_killing_punish_is_inadmissible() {
        let attacks = seven_attacks_totaling(70);
        let punish = Punish {
            kill_dir: KillDir::Neut,
            ..killing_punish()
        };
        assert!(!is_admissible(&attacks, &punish));
    }

    #[test]
    fn too_few_moves_is_inadmissible() {
        let attacks: Vec<Attack> = (0..3).map(|i| attack(i, 30)).collect();
        assert!(!is_admissible(&attacks, &killing_punish()));
    }

    #[test]
    fn too_little_damage_is_inadmissible() {
        let attacks: Vec<Attack> = (0..7).map(|i| attack(i, 1)).collect();
        assert!(!is_admissible(&attacks, &killing_punish()));
    }

    #[test]
    fn single_attack_dominance_is_inadmissible() {
        let mut attacks: Vec<Attack> = (0..7).map(|i| attack(i, 1)).collect();
        attacks[0].damage = 100;
        assert!(total_damage(&attacks) >= MIN_TOTAL_DAMAGE);
        assert!(!is_admissible(&attacks, &killing_punish()));
    }

    #[test]
    fn zero_damage_ratio_is_positive_infinity_and_inadmissible() {
        let attacks: Vec<Attack> = (0..7).map(|i| attack(i, 0)).collect();
        assert_eq!(highest_single_attack_damage_ratio(&attacks), f32::INFINITY);
        assert!(!is_admissible(&attacks, &killing_punish()));
    }

    #[test]
    fn unique_move_count_counts_distinct_ids() {
        let attacks = vec![attack(1, 10), attack(1, 10), attack(2, 10)];
        assert_eq!(unique_move_count(&attacks), 2);
        assert_eq!(total_move_count(&attacks), 3);
    }
}
