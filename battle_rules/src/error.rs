//! Error types for unit and word construction.

use thiserror::Error;

/// Errors surfaced synchronously when building units or words.
///
/// Everything that can go wrong mid-battle (stale indices, empty collections)
/// is handled as control flow instead, so this enum only covers malformed
/// construction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Unit characters must be single printable symbols.
    #[error("invalid unit character {0:?}: expected a printable symbol")]
    InvalidCharacter(char),

    /// Words must contain at least one character.
    #[error("cannot build a word from an empty string")]
    EmptyWord,
}
