//! A single combat unit derived from one character of a word.

use serde::{Deserialize, Serialize};

use super::UnitId;
use crate::error::RulesError;
use crate::mechanics::UnitClass;

/// A single combat entity: one letter of a word.
///
/// Health starts at the character's code point value and is deliberately
/// unclamped in both directions: overkill leaves a transient negative value
/// until the owning word removes the unit, and healing can push health above
/// `max_health`. Neither bound is enforced anywhere in the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    character: char,
    max_health: i32,
    health: i32,
    attack_power: i32,
    position: usize,
}

impl Unit {
    /// Build a unit from a single character.
    ///
    /// `max_health` is the character's code point value and `attack_power`
    /// depends on the unit class. Control characters and whitespace are
    /// rejected; the `char` parameter already guarantees exactly one symbol.
    pub fn new(character: char) -> Result<Self, RulesError> {
        if character.is_control() || character.is_whitespace() {
            return Err(RulesError::InvalidCharacter(character));
        }
        let max_health = character as i32;
        Ok(Self {
            id: UnitId::new(),
            character,
            max_health,
            health: max_health,
            attack_power: UnitClass::of(character).attack_power(),
            position: 0,
        })
    }

    /// The character this unit represents.
    pub fn character(&self) -> char {
        self.character
    }

    /// Whether this unit fights as a vowel or a consonant.
    pub fn class(&self) -> UnitClass {
        UnitClass::of(self.character)
    }

    /// Maximum health, fixed at creation.
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Current health. May be negative after overkill damage or above
    /// `max_health` after healing.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Attack power, fixed at creation.
    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    /// Current slot in the owning word. Renumbered on every word mutation.
    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Apply damage. Health is not clamped at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Apply healing. Health is not clamped at `max_health`.
    pub fn heal_damage(&mut self, amount: i32) {
        self.health += amount;
    }

    /// A unit is living while its health is strictly positive.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Read-only copy of the unit's current state for hooks and host UIs.
    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            id: self.id,
            character: self.character,
            health: self.health,
            max_health: self.max_health,
            attack_power: self.attack_power,
            position: self.position,
        }
    }
}

/// A plain-data copy of a unit's state at a point in time.
///
/// Snapshots never alias the live unit, so hosts can hold them across
/// animations without being able to corrupt battle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub character: char,
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
    pub position: usize,
}
