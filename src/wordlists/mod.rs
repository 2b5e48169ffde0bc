//! Word source for hangman
//!
//! Holds the candidate secret words and picks one uniformly at random per round.

pub mod loader;

use crate::core::Word;
use rand::Rng;
use tracing::debug;

pub use loader::{DEFAULT_WORDLIST, LoadError};

/// Non-empty pool of candidate words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<Word>,
}

impl WordSource {
    /// Wrap a word list; returns `None` when the list is empty
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // In bounds: `new` rejects an empty list
        let word = &self.words[rng.random_range(0..self.words.len())];
        debug!(length = word.len(), "selected secret word");
        word
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a `WordSource` is never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_list_has_no_source() {
        assert!(WordSource::new(Vec::new()).is_none());
    }

    #[test]
    fn choose_returns_a_listed_word() {
        let words = words_from_slice(&["cat", "ox", "river"]);
        let source = WordSource::new(words.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = source.choose(&mut rng);
            assert!(words.contains(word));
        }
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let source = WordSource::new(words_from_slice(&["cat", "ox", "river", "harbor"])).unwrap();

        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..8)
                .map(|_| source.choose(&mut rng).text().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn choose_eventually_covers_every_word() {
        let source = WordSource::new(words_from_slice(&["cat", "ox", "river"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(source.choose(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn single_word_source() {
        let source = WordSource::new(words_from_slice(&["a"])).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(source.choose(&mut rng).text(), "a");
        assert_eq!(source.len(), 1);
    }
}
