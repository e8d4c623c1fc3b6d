//! Battle mechanics: sides, unit classes, and tuning constants.

use serde::{Deserialize, Serialize};

/// Attack power of vowel units.
pub const VOWEL_ATTACK_POWER: i32 = 100;

/// Attack power of consonant units.
pub const CONSONANT_ATTACK_POWER: i32 = 5;

/// Amount a consonant heals each living neighbour during the action sub-phase.
pub const NEIGHBOR_HEAL_AMOUNT: i32 = 10;

/// Default pause between dispatched actions, in milliseconds.
pub const DEFAULT_TURN_DELAY_MS: u64 = 700;

/// The two participants in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// Whether a unit fights as a vowel or a consonant.
///
/// Vowels hit hard and do nothing else; consonants barely scratch but heal
/// their neighbours during the action sub-phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    Vowel,
    Consonant,
}

impl UnitClass {
    /// Classify a character, case-insensitively. Everything that is not one
    /// of `aeiou` fights as a consonant.
    pub fn of(character: char) -> Self {
        match character.to_ascii_lowercase() {
            'a' | 'e' | 'i' | 'o' | 'u' => UnitClass::Vowel,
            _ => UnitClass::Consonant,
        }
    }

    /// The attack power units of this class are created with.
    pub fn attack_power(self) -> i32 {
        match self {
            UnitClass::Vowel => VOWEL_ATTACK_POWER,
            UnitClass::Consonant => CONSONANT_ATTACK_POWER,
        }
    }
}
