//! Guess classification
//!
//! A pure query: given a guessed letter and the current round state, decide
//! whether it repeats an earlier guess, misses the word, or hits it. Applying
//! the result is left to [`RoundState`](super::RoundState).

use super::{RevealMask, UsedLetters, Word};

/// Outcome of submitting one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Letter was already missed or is already visible; nothing changes
    AlreadyGuessed,
    /// Letter is not in the word
    Miss,
    /// Letter occurs at these positions (ascending, never empty)
    Hit(Vec<usize>),
}

/// Classify `letter` against the secret word and the round's visible state
///
/// Checks run in order: duplicate (used or revealed), then miss, then hit.
/// `letter` is expected to be lowercase already.
///
/// # Examples
/// ```
/// use hangman::core::{evaluate, Classification, RevealMask, UsedLetters, Word};
///
/// let word = Word::new("banana").unwrap();
/// let mask = RevealMask::hidden(&word);
/// let used = UsedLetters::new();
///
/// assert_eq!(evaluate('a', &word, &mask, &used), Classification::Hit(vec![1, 3, 5]));
/// assert_eq!(evaluate('z', &word, &mask, &used), Classification::Miss);
/// ```
#[must_use]
pub fn evaluate(
    letter: char,
    word: &Word,
    mask: &RevealMask,
    used: &UsedLetters,
) -> Classification {
    if used.contains(letter) || mask.is_revealed(letter) {
        return Classification::AlreadyGuessed;
    }

    match word.positions_of(letter) {
        [] => Classification::Miss,
        positions => Classification::Hit(positions.to_vec()),
    }
}
