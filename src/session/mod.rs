//! Session - owns the characters tracked during one run
//!
//! Characters keep their insertion order. A name index enforces
//! uniqueness and gives constant-time lookup by name.

pub mod summary;

use crate::character::Character;
use crate::core::config::TrackerConfig;
use crate::core::error::{Result, TrackerError};
use ahash::AHashMap;

pub use summary::{summarize, CharacterSummary};

/// The characters of one interactive session
#[derive(Debug, Default)]
pub struct Session {
    characters: Vec<Character>,
    name_index: AHashMap<String, usize>,
    config: TrackerConfig,
}

impl Session {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            characters: Vec::new(),
            name_index: AHashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Add a character, rejecting a name that is already taken
    pub fn add(&mut self, character: Character) -> Result<&Character> {
        if self.contains(character.name()) {
            return Err(TrackerError::DuplicateName(character.name().to_string()));
        }

        let index = self.characters.len();
        self.name_index.insert(character.name().to_string(), index);
        self.characters.push(character);
        tracing::info!(
            "Added {} ({} characters in session)",
            self.characters[index].name(),
            self.characters.len()
        );

        Ok(&self.characters[index])
    }

    pub fn get(&self, name: &str) -> Result<&Character> {
        self.name_index
            .get(name)
            .map(|&index| &self.characters[index])
            .ok_or_else(|| TrackerError::UnknownCharacter(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Character> {
        match self.name_index.get(name) {
            Some(&index) => Ok(&mut self.characters[index]),
            None => Err(TrackerError::UnknownCharacter(name.to_string())),
        }
    }

    /// Name of the only character, when there is exactly one
    pub fn sole_character(&self) -> Option<&str> {
        match self.characters.as_slice() {
            [only] => Some(only.name()),
            _ => None,
        }
    }

    /// Characters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Character> + '_ {
        self.characters.iter()
    }

    /// Characters ordered by initiative, highest first.
    ///
    /// Ties keep insertion order.
    pub fn by_initiative(&self) -> Vec<&Character> {
        let mut ordered: Vec<&Character> = self.characters.iter().collect();
        ordered.sort_by(|a, b| b.initiative().cmp(&a.initiative()));
        ordered
    }

    /// Summaries of every character, in initiative order
    pub fn summaries(&self) -> Vec<CharacterSummary> {
        let digits = self.config.display_digits;
        self.by_initiative()
            .into_iter()
            .map(|character| summarize(character, digits))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn nz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    fn character(name: &str, initiative: u32) -> Character {
        Character::new(name, nz(50), nz(initiative))
    }

    #[test]
    fn test_add_and_lookup() {
        let mut session = Session::default();
        session.add(character("Marcus", 3)).unwrap();
        session.add(character("Elena", 7)).unwrap();

        assert_eq!(session.len(), 2);
        assert!(session.contains("Elena"));
        assert_eq!(session.get("Marcus").unwrap().initiative().get(), 3);
        assert!(matches!(
            session.get("Thomas"),
            Err(TrackerError::UnknownCharacter(name)) if name == "Thomas"
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut session = Session::default();
        session.add(character("Marcus", 3)).unwrap();
        let result = session.add(character("Marcus", 9));

        assert!(matches!(result, Err(TrackerError::DuplicateName(_))));
        assert_eq!(session.len(), 1);
        // Original entry untouched
        assert_eq!(session.get("Marcus").unwrap().initiative().get(), 3);
    }

    #[test]
    fn test_get_mut_mutates_in_place() {
        let mut session = Session::default();
        session.add(character("Sarah", 1)).unwrap();
        session
            .get_mut("Sarah")
            .unwrap()
            .overwrite_initiative(nz(12));
        assert_eq!(session.get("Sarah").unwrap().initiative().get(), 12);
    }

    #[test]
    fn test_sole_character() {
        let mut session = Session::default();
        assert_eq!(session.sole_character(), None);
        session.add(character("William", 2)).unwrap();
        assert_eq!(session.sole_character(), Some("William"));
        session.add(character("Thomas", 2)).unwrap();
        assert_eq!(session.sole_character(), None);
    }

    #[test]
    fn test_initiative_order_is_stable() {
        let mut session = Session::default();
        session.add(character("A", 2)).unwrap();
        session.add(character("B", 9)).unwrap();
        session.add(character("C", 2)).unwrap();
        session.add(character("D", 5)).unwrap();

        let names: Vec<&str> = session.by_initiative().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["B", "D", "A", "C"]);

        // Storage order is untouched
        let stored: Vec<&str> = session.iter().map(|c| c.name()).collect();
        assert_eq!(stored, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_summaries_follow_initiative() {
        let mut session = Session::default();
        session.add(character("Slow", 1)).unwrap();
        session.add(character("Fast", 20)).unwrap();

        let summaries = session.summaries();
        assert_eq!(summaries[0].name, "Fast");
        assert_eq!(summaries[1].name, "Slow");
    }
}
