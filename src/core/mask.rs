//! Per-round visibility state
//!
//! `RevealMask` tracks which positions of the secret word the player can see,
//! and `UsedLetters` records the wrong guesses made so far.

use super::Word;
use std::fmt;

/// Character shown for a position that has not been revealed yet
pub const PLACEHOLDER: char = '*';

/// Which letters of the secret word are currently visible
///
/// Each slot is either `None` (still hidden) or the letter at that position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    slots: Vec<Option<char>>,
}

impl RevealMask {
    /// Create an all-hidden mask the same length as `word`
    #[must_use]
    pub fn hidden(word: &Word) -> Self {
        Self {
            slots: vec![None; word.len()],
        }
    }

    /// Reveal the letters of `word` at the given positions
    ///
    /// Positions outside the word are ignored.
    pub fn reveal(&mut self, word: &Word, positions: &[usize]) {
        for &index in positions {
            if let Some(slot) = self.slots.get_mut(index) {
                *slot = Some(word.char_at(index));
            }
        }
    }

    /// Whether `letter` is visible anywhere in the mask
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        self.slots.contains(&Some(letter))
    }

    /// True when no placeholder remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of still-hidden slots
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for RevealMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}

/// Wrong guesses in the order they were made
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedLetters {
    letters: Vec<char>,
}

impl UsedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Record a wrong guess; returns false if it was already recorded
    pub fn insert(&mut self, letter: char) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_mask_has_word_length() {
        let word = Word::new("cat").unwrap();
        let mask = RevealMask::hidden(&word);
        assert_eq!(mask.len(), 3);
        assert_eq!(mask.hidden_count(), 3);
        assert!(!mask.is_complete());
        assert_eq!(mask.to_string(), "***");
    }

    #[test]
    fn reveal_sets_only_given_positions() {
        let word = Word::new("banana").unwrap();
        let mut mask = RevealMask::hidden(&word);
        mask.reveal(&word, word.positions_of('a'));
        assert_eq!(mask.to_string(), "*a*a*a");
        assert!(mask.is_revealed('a'));
        assert!(!mask.is_revealed('b'));
    }

    #[test]
    fn reveal_ignores_out_of_range() {
        let word = Word::new("ox").unwrap();
        let mut mask = RevealMask::hidden(&word);
        mask.reveal(&word, &[7]);
        assert_eq!(mask.hidden_count(), 2);
    }

    #[test]
    fn mask_completes_when_all_revealed() {
        let word = Word::new("ox").unwrap();
        let mut mask = RevealMask::hidden(&word);
        mask.reveal(&word, &[0, 1]);
        assert!(mask.is_complete());
        assert_eq!(mask.to_string(), "ox");
    }

    #[test]
    fn used_letters_keep_insertion_order() {
        let mut used = UsedLetters::new();
        assert!(used.insert('q'));
        assert!(used.insert('b'));
        assert!(!used.insert('q'));
        assert_eq!(used.letters(), &['q', 'b']);
        assert_eq!(used.len(), 2);
    }
}
