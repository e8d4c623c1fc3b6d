//! The resumable turn/targeting state machine.

mod completion;
mod plan;

pub use self::completion::Completion;

use std::collections::VecDeque;

use battle_rules::{Side, UnitId, UnitSnapshot, Word, DEFAULT_TURN_DELAY_MS, NEIGHBOR_HEAL_AMOUNT};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::events::{AttackEvent, BuffEvent};
use crate::hooks::BattleHooks;
use crate::scheduler::Scheduler;
use self::plan::{plan_turn, select_defender, PlannedAction};

/// Lifecycle of an engine. `Finished` is terminal; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Constructed, not started.
    Idle,
    /// `start()` was called and no terminal outcome has been reached.
    Running,
    /// A win was detected or `stop()` was called.
    Finished,
}

/// Engine tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Pause between dispatched actions and before each turn, in
    /// milliseconds. Passed through to the scheduler unchanged.
    pub turn_delay_ms: u64,
    /// When true, stale completions are reported as errors instead of being
    /// silently ignored.
    pub strict: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            turn_delay_ms: DEFAULT_TURN_DELAY_MS,
            strict: false,
        }
    }
}

/// The effect waiting on the outstanding completion token.
#[derive(Debug)]
enum PendingEffect {
    /// Apply attack damage, then remove the defender if it died.
    Attack { defender: UnitId, damage: i32 },
    /// Apply a neighbour heal on the defending side.
    Heal { target: UnitId, amount: i32 },
    /// Pause between two entries of the same turn.
    Pace,
    /// Pause before the next turn begins. The turn flag already flipped.
    TurnStart,
}

#[derive(Debug)]
struct Pending {
    seq: u64,
    effect: PendingEffect,
}

/// Orchestrates a battle between two words.
///
/// The engine owns both words for the duration of the session and is driven
/// entirely from the outside: `start()` dispatches the first action, and
/// every subsequent step happens when the host feeds a completion token back
/// through [`CombatEngine::resolve`]. At most one action is in flight at any
/// time.
pub struct CombatEngine {
    player: Word,
    enemy: Word,
    turn: Side,
    state: EngineState,
    config: BattleConfig,
    hooks: Box<dyn BattleHooks>,
    scheduler: Box<dyn Scheduler>,
    plan: VecDeque<PlannedAction>,
    pending: Option<Pending>,
    next_seq: u64,
}

impl CombatEngine {
    /// Build an engine over two words. The player side moves first.
    pub fn new(
        player: Word,
        enemy: Word,
        hooks: Box<dyn BattleHooks>,
        scheduler: Box<dyn Scheduler>,
        config: BattleConfig,
    ) -> Self {
        Self {
            player,
            enemy,
            turn: Side::Player,
            state: EngineState::Idle,
            config,
            hooks,
            scheduler,
            plan: VecDeque::new(),
            pending: None,
            next_seq: 0,
        }
    }

    /// Begin the battle. No-op unless the engine is `Idle`, so calling it
    /// twice, or on a finished engine, does nothing.
    pub fn start(&mut self) {
        if self.state != EngineState::Idle {
            return;
        }
        self.state = EngineState::Running;
        tracing::debug!(player = %self.player, enemy = %self.enemy, "battle started");
        self.begin_turn();
    }

    /// Finish the battle without declaring a winner. Idempotent.
    ///
    /// Clears the plan and the pending slot, so every outstanding completion
    /// token goes stale and is ignored when it eventually arrives.
    pub fn stop(&mut self) {
        if self.state == EngineState::Finished {
            return;
        }
        self.state = EngineState::Finished;
        self.plan.clear();
        self.pending = None;
        tracing::debug!("battle stopped");
    }

    /// Feed a completion token back in, applying the effect of the action it
    /// belongs to and advancing the battle.
    ///
    /// Stale tokens - after `stop()`, after a win, or not matching the action
    /// in flight - are silently ignored unless [`BattleConfig::strict`] is
    /// set, in which case they are returned as errors.
    pub fn resolve(&mut self, completion: Completion) -> Result<(), EngineError> {
        if self.state != EngineState::Running {
            return self.stale(EngineError::BattleFinished);
        }
        let pending = match self.pending.take() {
            Some(p) if p.seq == completion.seq => p,
            other => {
                self.pending = other;
                return self.stale(EngineError::StaleCompletion);
            }
        };

        match pending.effect {
            PendingEffect::Heal { target, amount } => {
                let side = self.turn.opponent();
                self.word_mut(side).heal_unit(target, amount);
                self.pace();
            }
            PendingEffect::Attack { defender, damage } => {
                let defending_side = self.turn.opponent();
                let health = self.word_mut(defending_side).damage_unit(defender, damage);
                if matches!(health, Some(h) if h <= 0) {
                    self.remove_destroyed(defending_side, defender);
                    if !self.word(defending_side).has_living() {
                        let winner = self.turn;
                        self.finish(winner);
                        return Ok(());
                    }
                }
                self.pace();
            }
            PendingEffect::Pace => self.dispatch_next(),
            PendingEffect::TurnStart => self.begin_turn(),
        }
        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The side whose turn it is (or will be next, during the turn pause).
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Read access to one side's word.
    pub fn word(&self, side: Side) -> &Word {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Read-only snapshots of one side's living units.
    pub fn living(&self, side: Side) -> Vec<UnitSnapshot> {
        self.word(side).living_snapshots()
    }

    /// Whether a dispatched action is waiting on its completion.
    pub fn action_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// The engine's tuning.
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    fn word_mut(&mut self, side: Side) -> &mut Word {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Start of a turn: win check first, then plan and dispatch.
    fn begin_turn(&mut self) {
        let player_alive = self.player.has_living();
        let enemy_alive = self.enemy.has_living();
        if !player_alive || !enemy_alive {
            let winner = if enemy_alive { Side::Enemy } else { Side::Player };
            self.finish(winner);
            return;
        }

        let (acting, defending) = match self.turn {
            Side::Player => (&self.player, &self.enemy),
            Side::Enemy => (&self.enemy, &self.player),
        };
        self.plan = plan_turn(acting, defending);
        tracing::debug!(side = %self.turn, actions = self.plan.len(), "turn planned");
        self.dispatch_next();
    }

    /// Dispatch the next plannable entry, skipping entries whose units are
    /// gone or whose targeting comes up empty. An exhausted plan ends the
    /// turn.
    fn dispatch_next(&mut self) {
        while let Some(action) = self.plan.pop_front() {
            match action {
                PlannedAction::Buff { caster, target } => {
                    let side = self.turn.opponent();
                    let word = self.word(side);
                    let caster_snapshot = match word.get(caster) {
                        Some(unit) => unit.snapshot(),
                        None => continue,
                    };
                    let target_snapshot = match word.get(target) {
                        Some(unit) if unit.is_alive() => unit.snapshot(),
                        _ => continue,
                    };
                    let event = BuffEvent {
                        side,
                        caster: caster_snapshot,
                        target: target_snapshot,
                        amount: NEIGHBOR_HEAL_AMOUNT,
                    };
                    let completion = self.issue(PendingEffect::Heal {
                        target,
                        amount: NEIGHBOR_HEAL_AMOUNT,
                    });
                    self.hooks.on_buff(event, completion);
                    return;
                }
                PlannedAction::Attack { attacker } => {
                    let acting_side = self.turn;
                    let defending_side = acting_side.opponent();
                    let attacker_snapshot = match self.word(acting_side).get(attacker) {
                        Some(unit) => unit.snapshot(),
                        None => continue,
                    };
                    let defender =
                        match select_defender(self.word(defending_side), attacker_snapshot.position)
                        {
                            Some(id) => id,
                            // No living defender at or below: skipped, not
                            // retargeted.
                            None => continue,
                        };
                    let defender_snapshot = match self.word(defending_side).get(defender) {
                        Some(unit) => unit.snapshot(),
                        None => continue,
                    };
                    let damage = attacker_snapshot.attack_power;
                    let event = AttackEvent {
                        attacking_side: acting_side,
                        attacker: attacker_snapshot,
                        defender: defender_snapshot,
                        damage,
                    };
                    let completion = self.issue(PendingEffect::Attack { defender, damage });
                    self.hooks.on_attack(event, completion);
                    return;
                }
            }
        }
        self.end_turn();
    }

    /// After a resolved action: pause before the next entry, or end the turn
    /// when the plan is exhausted.
    fn pace(&mut self) {
        if self.plan.is_empty() {
            self.end_turn();
        } else {
            let completion = self.issue(PendingEffect::Pace);
            let delay = self.config.turn_delay_ms;
            self.scheduler.delay(completion, delay);
        }
    }

    /// Flip the turn flag, then wait out the configured delay before the
    /// next turn begins.
    fn end_turn(&mut self) {
        self.turn = self.turn.opponent();
        let completion = self.issue(PendingEffect::TurnStart);
        let delay = self.config.turn_delay_ms;
        self.scheduler.delay(completion, delay);
    }

    /// Remove a dead unit from its word and notify the host.
    fn remove_destroyed(&mut self, side: Side, id: UnitId) {
        let removed = {
            let word = self.word_mut(side);
            word.position_of(id).and_then(|position| word.remove_at(position))
        };
        if let Some(unit) = removed {
            tracing::debug!(character = %unit.character(), side = %side, "unit destroyed");
            self.hooks.on_unit_destroyed(unit.snapshot(), side);
        }
    }

    fn finish(&mut self, winner: Side) {
        self.state = EngineState::Finished;
        self.plan.clear();
        self.pending = None;
        tracing::debug!(winner = %winner, "battle finished");
        self.hooks.on_word_win(winner);
    }

    fn issue(&mut self, effect: PendingEffect) -> Completion {
        self.next_seq += 1;
        self.pending = Some(Pending {
            seq: self.next_seq,
            effect,
        });
        Completion { seq: self.next_seq }
    }

    fn stale(&self, error: EngineError) -> Result<(), EngineError> {
        if self.config.strict {
            Err(error)
        } else {
            Ok(())
        }
    }
}
