//! Words: ordered, resizable collections of units.

use serde::{Deserialize, Serialize};

use super::{Unit, UnitId, UnitSnapshot};
use crate::error::RulesError;

/// One side's word: an ordered collection of units.
///
/// Position 0 is the front of the word. Every mutation renumbers the units so
/// that each unit's stored position always equals its array offset - there
/// are never holes. The word owns its units exclusively; callers mutate them
/// only through [`Word::damage_unit`] and [`Word::heal_unit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    source: String,
    units: Vec<Unit>,
}

impl Word {
    /// Build a word with one unit per character, in string order.
    pub fn new(word: &str) -> Result<Self, RulesError> {
        if word.is_empty() {
            return Err(RulesError::EmptyWord);
        }
        let mut units = Vec::with_capacity(word.chars().count());
        for character in word.chars() {
            units.push(Unit::new(character)?);
        }
        let mut built = Self {
            source: word.to_string(),
            units,
        };
        built.renumber();
        Ok(built)
    }

    /// The string this word was built from, for display and logging.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of units currently in the word, living or not.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the word has no units at all.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units in position order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Insert a unit before `index`, or append when `index` is `None` or past
    /// the end. Renumbers and returns a reference to the inserted unit.
    pub fn insert(&mut self, unit: Unit, index: Option<usize>) -> &Unit {
        let at = match index {
            Some(i) if i < self.units.len() => i,
            _ => self.units.len(),
        };
        self.units.insert(at, unit);
        self.renumber();
        &self.units[at]
    }

    /// Remove the unit at `index`, closing the gap and renumbering.
    /// Out-of-range indices are a silent no-op and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Unit> {
        if index >= self.units.len() {
            return None;
        }
        let unit = self.units.remove(index);
        self.renumber();
        Some(unit)
    }

    /// Exchange two slots in place. Ignored unless both indices are in range.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.units.len() && b < self.units.len() {
            self.units.swap(a, b);
            self.renumber();
        }
    }

    /// The lowest-position living unit, if any.
    pub fn first_living(&self) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.is_alive())
    }

    /// All living units in position order.
    ///
    /// Recomputed fresh on every call; never cache the result across
    /// mutations.
    pub fn living(&self) -> Vec<&Unit> {
        self.units.iter().filter(|unit| unit.is_alive()).collect()
    }

    /// Whether any unit is still alive.
    pub fn has_living(&self) -> bool {
        self.units.iter().any(|unit| unit.is_alive())
    }

    /// Read-only copies of the living units, for host UIs.
    pub fn living_snapshots(&self) -> Vec<UnitSnapshot> {
        self.units
            .iter()
            .filter(|unit| unit.is_alive())
            .map(Unit::snapshot)
            .collect()
    }

    /// Look up a unit by id.
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Current position of the unit with `id`, if it is still in the word.
    pub fn position_of(&self, id: UnitId) -> Option<usize> {
        self.units.iter().position(|unit| unit.id == id)
    }

    /// Apply damage to the unit with `id`, returning its new health.
    /// Unknown ids are ignored.
    pub fn damage_unit(&mut self, id: UnitId, amount: i32) -> Option<i32> {
        let unit = self.units.iter_mut().find(|unit| unit.id == id)?;
        unit.take_damage(amount);
        Some(unit.health())
    }

    /// Heal the unit with `id`, returning its new health. Unknown ids are
    /// ignored.
    pub fn heal_unit(&mut self, id: UnitId, amount: i32) -> Option<i32> {
        let unit = self.units.iter_mut().find(|unit| unit.id == id)?;
        unit.heal_damage(amount);
        Some(unit.health())
    }

    fn renumber(&mut self) {
        for (index, unit) in self.units.iter_mut().enumerate() {
            unit.set_position(index);
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for unit in &self.units {
            write!(f, "{}", unit.character())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions_match_offsets(word: &Word) -> bool {
        word.units()
            .iter()
            .enumerate()
            .all(|(offset, unit)| unit.position() == offset)
    }

    #[test]
    fn test_new_word_numbers_units_in_order() {
        let word = Word::new("chess").unwrap();
        assert_eq!(word.len(), 5);
        assert_eq!(word.source(), "chess");
        assert!(positions_match_offsets(&word));
        assert_eq!(word.units()[0].character(), 'c');
        assert_eq!(word.units()[4].character(), 's');
    }

    #[test]
    fn test_empty_word_is_an_error() {
        assert_eq!(Word::new("").unwrap_err(), RulesError::EmptyWord);
    }

    #[test]
    fn test_invalid_character_propagates() {
        assert_eq!(
            Word::new("a b").unwrap_err(),
            RulesError::InvalidCharacter(' ')
        );
    }

    #[test]
    fn test_insert_appends_past_the_end() {
        let mut word = Word::new("ab").unwrap();
        let inserted = word.insert(Unit::new('c').unwrap(), Some(10));
        assert_eq!(inserted.position(), 2);
        assert_eq!(word.to_string(), "abc");

        word.insert(Unit::new('z').unwrap(), None);
        assert_eq!(word.to_string(), "abcz");
        assert!(positions_match_offsets(&word));
    }

    #[test]
    fn test_insert_before_index_renumbers() {
        let mut word = Word::new("ac").unwrap();
        let inserted = word.insert(Unit::new('b').unwrap(), Some(1));
        assert_eq!(inserted.character(), 'b');
        assert_eq!(inserted.position(), 1);
        assert_eq!(word.to_string(), "abc");
        assert!(positions_match_offsets(&word));
    }

    #[test]
    fn test_remove_at_closes_the_gap() {
        let mut word = Word::new("abc").unwrap();
        let removed = word.remove_at(1).unwrap();
        assert_eq!(removed.character(), 'b');
        assert_eq!(word.to_string(), "ac");
        assert!(positions_match_offsets(&word));
    }

    #[test]
    fn test_remove_at_out_of_range_is_a_noop() {
        let mut word = Word::new("abc").unwrap();
        assert!(word.remove_at(3).is_none());
        assert_eq!(word.len(), 3);
        assert!(positions_match_offsets(&word));
    }

    #[test]
    fn test_swap_renumbers_and_guards_range() {
        let mut word = Word::new("abc").unwrap();
        word.swap(0, 2);
        assert_eq!(word.to_string(), "cba");
        assert!(positions_match_offsets(&word));

        // One index out of range: nothing moves.
        word.swap(0, 3);
        assert_eq!(word.to_string(), "cba");
    }

    #[test]
    fn test_first_living_skips_dead_units() {
        let mut word = Word::new("abc").unwrap();
        let front = word.units()[0].id;
        word.damage_unit(front, 1_000);

        let first = word.first_living().unwrap();
        assert_eq!(first.character(), 'b');
        assert_eq!(first.position(), 1);
    }

    #[test]
    fn test_living_preserves_relative_order() {
        let mut word = Word::new("abcd").unwrap();
        let second = word.units()[1].id;
        word.damage_unit(second, 1_000);

        let living: Vec<char> = word.living().iter().map(|u| u.character()).collect();
        assert_eq!(living, vec!['a', 'c', 'd']);
        assert!(word.has_living());
    }

    #[test]
    fn test_no_living_units() {
        let mut word = Word::new("ab").unwrap();
        let ids: Vec<_> = word.units().iter().map(|u| u.id).collect();
        for id in ids {
            word.damage_unit(id, 1_000);
        }
        assert!(word.first_living().is_none());
        assert!(!word.has_living());
        assert!(word.living_snapshots().is_empty());
        // Dead units stay in the word until something removes them.
        assert_eq!(word.len(), 2);
    }

    #[test]
    fn test_damage_and_heal_by_id() {
        let mut word = Word::new("ab").unwrap();
        let id = word.units()[1].id;

        assert_eq!(word.damage_unit(id, 100), Some(-2));
        assert_eq!(word.heal_unit(id, 3), Some(1));
        assert_eq!(word.damage_unit(UnitId::new(), 5), None);
    }

    #[test]
    fn test_display_tracks_mutations() {
        let mut word = Word::new("word").unwrap();
        word.remove_at(0);
        assert_eq!(word.to_string(), "ord");
        assert_eq!(word.source(), "word");
    }

    #[test]
    fn test_serde_round_trip_preserves_positions() {
        let mut word = Word::new("apple").unwrap();
        word.remove_at(2);

        let json = serde_json::to_string(&word).unwrap();
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "aple");
        assert!(positions_match_offsets(&back));
    }
}
