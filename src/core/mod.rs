//! Core domain types for hangman
//!
//! The secret word, what the player can see of it, guess classification, and
//! the per-round state. Nothing here performs I/O.

mod guess;
mod mask;
mod round;
mod word;

pub use guess::{Classification, evaluate};
pub use mask::{PLACEHOLDER, RevealMask, UsedLetters};
pub use round::{DEFAULT_MAX_TRIES, GameConfig, RoundError, RoundResult, RoundState, Turn};
pub use word::{Word, WordError};
