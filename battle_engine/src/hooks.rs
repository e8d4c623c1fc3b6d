//! The hook contract between the engine and its host.

use battle_rules::{Side, UnitSnapshot};

use crate::engine::Completion;
use crate::events::{AttackEvent, BuffEvent};

/// Callbacks the host supplies to animate battle actions.
///
/// `on_attack` and `on_buff` each carry a [`Completion`] token. The host must
/// eventually feed that token back through
/// [`CombatEngine::resolve`](crate::engine::CombatEngine::resolve) - until
/// then the engine stays suspended with that single action in flight. A host
/// that drops a token stalls the battle forever; a watchdog is the host's
/// business, not the engine's.
///
/// `on_word_win` and `on_unit_destroyed` are fire-and-forget notifications.
pub trait BattleHooks {
    /// An attack is being dispatched. Animate it, then resolve `completion`.
    fn on_attack(&mut self, event: AttackEvent, completion: Completion);

    /// A neighbour heal is being dispatched. Animate it, then resolve
    /// `completion`.
    fn on_buff(&mut self, event: BuffEvent, completion: Completion);

    /// One side has no living units left; `winner` is the other side.
    fn on_word_win(&mut self, winner: Side);

    /// A unit dropped to zero health or below and was removed from its word.
    fn on_unit_destroyed(&mut self, _unit: UnitSnapshot, _side: Side) {}
}
