//! Scripted replay command
//!
//! Plays a fixed sequence of letters against a known word and records each turn.

use crate::core::{Classification, GameConfig, RoundResult, RoundState, Word, WordError};
use tracing::debug;

/// What to replay
pub struct ReplayConfig {
    pub word: String,
    pub letters: String,
    pub max_tries: u32,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(word: String, letters: String) -> Self {
        Self {
            word,
            letters,
            max_tries: GameConfig::default().max_tries,
        }
    }
}

/// Result of a replay
pub struct ReplayResult {
    pub word: String,
    pub steps: Vec<ReplayStep>,
    pub result: RoundResult,
    pub tries: u32,
    pub remaining_tries: u32,
    pub hidden: usize,
}

/// A single processed letter
pub struct ReplayStep {
    pub letter: char,
    pub classification: Classification,
    pub mask: String,
    pub tries: u32,
}

/// Replay `config.letters` against `config.word`
///
/// Whitespace between letters is ignored and letters are lowercased. Letters
/// after the round is won or lost are not played.
///
/// # Errors
///
/// Returns `WordError` if the word is empty or contains non-letters.
pub fn replay_guesses(config: &ReplayConfig) -> Result<ReplayResult, WordError> {
    let word = Word::new(config.word.as_str())?;
    let mut round = RoundState::new(word, GameConfig::new(config.max_tries));
    let mut steps = Vec::new();

    let letters = config
        .letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase);

    for letter in letters {
        let Ok(turn) = round.guess(letter) else {
            debug!(%letter, "round over, ignoring remaining letters");
            break;
        };
        steps.push(ReplayStep {
            letter,
            classification: turn.classification,
            mask: round.mask().to_string(),
            tries: round.tries(),
        });
    }

    Ok(ReplayResult {
        word: round.word().text().to_string(),
        steps,
        result: round.result(),
        tries: round.tries(),
        remaining_tries: round.remaining_tries(),
        hidden: round.mask().hidden_count(),
    })
}
