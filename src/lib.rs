//! Hangman
//!
//! A terminal word-guessing game: a secret word is drawn from a word list and
//! the player guesses it one letter at a time before the wrong guesses run out.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Classification, GameConfig, RoundResult, RoundState, Word};
//!
//! let mut round = RoundState::new(Word::new("cat").unwrap(), GameConfig::default());
//!
//! assert_eq!(round.guess('a').unwrap().classification, Classification::Hit(vec![1]));
//! assert_eq!(round.guess('z').unwrap().classification, Classification::Miss);
//! round.guess('c').unwrap();
//! assert_eq!(round.guess('t').unwrap().result, RoundResult::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Input parsing and round-to-round transitions
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
