//! Turn planning: which actions a turn will dispatch, and in what order.

use std::collections::VecDeque;

use battle_rules::{UnitClass, UnitId, Word};

/// One planned entry of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlannedAction {
    /// A consonant on the defending side heals one living neighbour.
    Buff { caster: UnitId, target: UnitId },
    /// A unit on the acting side attacks. The defender is chosen at dispatch
    /// time, against whoever is still alive.
    Attack { attacker: UnitId },
}

/// Build the action list for one turn.
///
/// Buffs come first: every living consonant on the *defending* side heals
/// each of its living immediate neighbours, casters in position order, the
/// `position - 1` neighbour before `position + 1`. Vowels produce no action.
/// Attacks follow, one per living unit on the acting side in position order;
/// the attacker list is fixed here and does not grow mid-turn.
pub(crate) fn plan_turn(acting: &Word, defending: &Word) -> VecDeque<PlannedAction> {
    let mut plan = VecDeque::new();

    for caster in defending.living() {
        if caster.class() != UnitClass::Consonant {
            continue;
        }
        let position = caster.position();
        let mut neighbours = Vec::new();
        if position > 0 {
            neighbours.push(position - 1);
        }
        neighbours.push(position + 1);
        for neighbour in neighbours {
            if let Some(target) = defending.units().get(neighbour) {
                if target.is_alive() {
                    plan.push_back(PlannedAction::Buff {
                        caster: caster.id,
                        target: target.id,
                    });
                }
            }
        }
    }

    for attacker in acting.living() {
        plan.push_back(PlannedAction::Attack { attacker: attacker.id });
    }

    plan
}

/// Pick the defender for an attacker at `attacker_position`: the living
/// defender with the highest position that does not exceed it. `None` means
/// the attack is skipped - never retargeted.
pub(crate) fn select_defender(defending: &Word, attacker_position: usize) -> Option<UnitId> {
    defending
        .living()
        .into_iter()
        .filter(|unit| unit.position() <= attacker_position)
        .last()
        .map(|unit| unit.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Kill the units at the given positions, leaving them in the word.
    fn kill(word: &mut Word, positions: &[usize]) {
        let ids: Vec<_> = positions.iter().map(|&p| word.units()[p].id).collect();
        for id in ids {
            word.damage_unit(id, 1_000);
        }
    }

    #[test]
    fn test_defender_is_highest_position_at_or_below() {
        // Living defenders at positions 0, 2 and 4.
        let mut defending = Word::new("bbbbb").unwrap();
        kill(&mut defending, &[1, 3]);

        let chosen = select_defender(&defending, 3).unwrap();
        assert_eq!(defending.position_of(chosen), Some(2));

        let chosen = select_defender(&defending, 4).unwrap();
        assert_eq!(defending.position_of(chosen), Some(4));
    }

    #[test]
    fn test_no_defender_at_or_below_means_skip() {
        // Living defenders only at positions 2 and 4.
        let mut defending = Word::new("bbbbb").unwrap();
        kill(&mut defending, &[0, 1, 3]);

        assert_eq!(select_defender(&defending, 0), None);
        assert_eq!(select_defender(&defending, 1), None);
        assert!(select_defender(&defending, 2).is_some());
    }

    #[test]
    fn test_plan_buffs_before_attacks() {
        let acting = Word::new("ab").unwrap();
        let defending = Word::new("aba").unwrap();

        let plan = plan_turn(&acting, &defending);
        let buffs = plan
            .iter()
            .take_while(|a| matches!(a, PlannedAction::Buff { .. }))
            .count();
        assert_eq!(buffs, 2);
        assert_eq!(plan.len(), 4); // two heals, two attackers
    }

    #[test]
    fn test_buff_targets_lower_neighbour_first() {
        let defending = Word::new("aba").unwrap();
        let acting = Word::new("a").unwrap();

        let plan = plan_turn(&acting, &defending);
        let caster = defending.units()[1].id;
        let lower = defending.units()[0].id;
        let upper = defending.units()[2].id;

        assert_eq!(
            plan[0],
            PlannedAction::Buff {
                caster,
                target: lower
            }
        );
        assert_eq!(
            plan[1],
            PlannedAction::Buff {
                caster,
                target: upper
            }
        );
    }

    #[test]
    fn test_vowels_produce_no_buffs() {
        let acting = Word::new("b").unwrap();
        let defending = Word::new("aea").unwrap();

        let plan = plan_turn(&acting, &defending);
        assert!(plan
            .iter()
            .all(|a| matches!(a, PlannedAction::Attack { .. })));
    }

    #[test]
    fn test_dead_units_cast_and_receive_nothing() {
        let acting = Word::new("a").unwrap();
        let mut defending = Word::new("bbb").unwrap();
        kill(&mut defending, &[0]);

        let plan = plan_turn(&acting, &defending);
        // Caster at 1 heals only position 2; caster at 2 heals only position 1.
        let buffs: Vec<_> = plan
            .iter()
            .filter(|a| matches!(a, PlannedAction::Buff { .. }))
            .collect();
        assert_eq!(buffs.len(), 2);
        let dead = defending.units()[0].id;
        assert!(buffs.iter().all(|a| match a {
            PlannedAction::Buff { caster, target } => *caster != dead && *target != dead,
            _ => false,
        }));
    }

    #[test]
    fn test_only_living_attackers_are_planned() {
        let mut acting = Word::new("ab").unwrap();
        kill(&mut acting, &[0]);
        let defending = Word::new("e").unwrap();

        let plan = plan_turn(&acting, &defending);
        assert_eq!(plan.len(), 1);
        let survivor = acting.units()[1].id;
        assert_eq!(plan[0], PlannedAction::Attack { attacker: survivor });
    }
}
