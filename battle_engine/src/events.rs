//! Event payloads handed to hooks when actions are dispatched.

use battle_rules::{Side, UnitSnapshot};
use serde::{Deserialize, Serialize};

/// An attack dispatched to the host for animation.
///
/// Damage has not been applied yet when this event is delivered; it lands
/// when the host feeds the matching completion back into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEvent {
    /// The side the attacker belongs to.
    pub attacking_side: Side,
    pub attacker: UnitSnapshot,
    pub defender: UnitSnapshot,
    /// Damage that will be applied on completion.
    pub damage: i32,
}

/// A neighbour heal dispatched to the host for animation.
///
/// Caster and target always belong to the same word. As with attacks, the
/// heal is applied only when the completion resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffEvent {
    /// The side both caster and target belong to.
    pub side: Side,
    pub caster: UnitSnapshot,
    pub target: UnitSnapshot,
    /// Healing that will be applied on completion.
    pub amount: i32,
}
