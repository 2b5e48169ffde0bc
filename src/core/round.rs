//! A single hangman round
//!
//! `RoundState` owns everything that changes during a round. It is created
//! fresh for each word and only mutated through [`RoundState::guess`].

use super::guess::{Classification, evaluate};
use super::{RevealMask, UsedLetters, Word};
use thiserror::Error;
use tracing::trace;

/// Wrong guesses allowed per round unless configured otherwise
pub const DEFAULT_MAX_TRIES: u32 = 10;

/// Settings fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_tries: u32,
}

impl GameConfig {
    /// Create a config; a zero try limit is raised to one
    #[must_use]
    pub const fn new(max_tries: u32) -> Self {
        Self {
            max_tries: if max_tries == 0 { 1 } else { max_tries },
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRIES)
    }
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    InProgress,
    Won,
    Lost,
}

impl RoundResult {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("The round is already over")]
    Finished,
}

/// What one processed guess did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub letter: char,
    pub classification: Classification,
    pub result: RoundResult,
}

/// Mutable state of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    word: Word,
    mask: RevealMask,
    used: UsedLetters,
    tries: u32,
    max_tries: u32,
}

impl RoundState {
    /// Start a round: all slots hidden, no wrong guesses
    #[must_use]
    pub fn new(word: Word, config: GameConfig) -> Self {
        let mask = RevealMask::hidden(&word);
        Self {
            word,
            mask,
            used: UsedLetters::new(),
            tries: 0,
            max_tries: config.max_tries,
        }
    }

    /// Process one guessed letter
    ///
    /// A duplicate leaves the round untouched. A miss records the letter and
    /// uses up a try. A hit reveals every position of the letter.
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the round was already won or lost.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Classification, GameConfig, RoundResult, RoundState, Word};
    ///
    /// let mut round = RoundState::new(Word::new("ox").unwrap(), GameConfig::default());
    /// let turn = round.guess('o').unwrap();
    /// assert_eq!(turn.classification, Classification::Hit(vec![0]));
    /// assert_eq!(round.guess('x').unwrap().result, RoundResult::Won);
    /// ```
    pub fn guess(&mut self, letter: char) -> Result<Turn, RoundError> {
        if self.result().is_over() {
            return Err(RoundError::Finished);
        }

        let classification = evaluate(letter, &self.word, &self.mask, &self.used);
        match &classification {
            Classification::AlreadyGuessed => {}
            Classification::Miss => {
                self.used.insert(letter);
                self.tries += 1;
            }
            Classification::Hit(positions) => self.mask.reveal(&self.word, positions),
        }

        let result = self.result();
        trace!(%letter, ?classification, ?result, tries = self.tries, "guess processed");

        Ok(Turn {
            letter,
            classification,
            result,
        })
    }

    /// Won when nothing is hidden, lost when the tries are spent
    #[must_use]
    pub fn result(&self) -> RoundResult {
        if self.mask.is_complete() {
            RoundResult::Won
        } else if self.tries >= self.max_tries {
            RoundResult::Lost
        } else {
            RoundResult::InProgress
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn mask(&self) -> &RevealMask {
        &self.mask
    }

    #[must_use]
    pub const fn used(&self) -> &UsedLetters {
        &self.used
    }

    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    #[must_use]
    pub const fn remaining_tries(&self) -> u32 {
        self.max_tries.saturating_sub(self.tries)
    }
}
