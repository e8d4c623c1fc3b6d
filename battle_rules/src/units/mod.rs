//! Unit definitions: single letters and the words they form.

mod unit;
mod word;

pub use unit::*;
pub use word::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for units, stable across position changes.
///
/// Positions shift whenever a word is mutated, so anything that needs to
/// refer to a unit across a suspension point (an in-flight attack, a host
/// animation) should hold its id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    /// Create a new random unit ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty unit ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
