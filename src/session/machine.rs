//! Session state machine
//!
//! Pure transitions between waiting for the player, playing a round, and the
//! two round endings. Every method consumes the state and returns the next
//! one; events that make no sense in the current state leave it unchanged.

use crate::core::{GameConfig, RoundResult, RoundState, Turn, Word};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the player to confirm or decline a new round
    #[default]
    AwaitingStart,
    InRound(RoundState),
    RoundWon(RoundState),
    /// Lost; the finished round still holds the secret word for disclosure
    RoundLost(RoundState),
    /// Player declined; the session is over
    Ended,
}

impl SessionState {
    /// Player confirmed: begin a fresh round with `word`
    #[must_use]
    pub fn start(self, word: Word, config: GameConfig) -> Self {
        match self {
            Self::AwaitingStart => {
                debug!(length = word.len(), max_tries = config.max_tries, "round started");
                Self::InRound(RoundState::new(word, config))
            }
            other => other,
        }
    }

    /// Player declined to start another round
    #[must_use]
    pub fn decline(self) -> Self {
        match self {
            Self::AwaitingStart => Self::Ended,
            other => other,
        }
    }

    /// Apply a guessed letter to the active round
    ///
    /// Returns the next state and, when a round was active, what the guess did.
    #[must_use]
    pub fn guess(self, letter: char) -> (Self, Option<Turn>) {
        let mut round = match self {
            Self::InRound(round) => round,
            other => return (other, None),
        };

        let Ok(turn) = round.guess(letter) else {
            return (Self::InRound(round), None);
        };

        let next = match turn.result {
            RoundResult::InProgress => Self::InRound(round),
            RoundResult::Won => {
                debug!(tries = round.tries(), "round won");
                Self::RoundWon(round)
            }
            RoundResult::Lost => {
                debug!(tries = round.tries(), "round lost");
                Self::RoundLost(round)
            }
        };
        (next, Some(turn))
    }

    /// Leave a finished round and offer a new one
    #[must_use]
    pub fn next_round(self) -> Self {
        match self {
            Self::RoundWon(_) | Self::RoundLost(_) => Self::AwaitingStart,
            other => other,
        }
    }

    /// The round being played or just finished, if any
    #[must_use]
    pub const fn round(&self) -> Option<&RoundState> {
        match self {
            Self::InRound(round) | Self::RoundWon(round) | Self::RoundLost(round) => Some(round),
            Self::AwaitingStart | Self::Ended => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;

    fn started(text: &str, max_tries: u32) -> SessionState {
        SessionState::AwaitingStart.start(Word::new(text).unwrap(), GameConfig::new(max_tries))
    }

    #[test]
    fn start_enters_fresh_round() {
        let state = started("cat", 10);
        let round = state.round().unwrap();
        assert!(matches!(state, SessionState::InRound(_)));
        assert_eq!(round.tries(), 0);
        assert_eq!(round.mask().hidden_count(), 3);
    }

    #[test]
    fn decline_ends_session() {
        let state = SessionState::AwaitingStart.decline();
        assert_eq!(state, SessionState::Ended);
    }

    #[test]
    fn decline_during_round_is_ignored() {
        let state = started("cat", 10).decline();
        assert!(matches!(state, SessionState::InRound(_)));
    }

    #[test]
    fn guess_without_round_does_nothing() {
        let (state, turn) = SessionState::AwaitingStart.guess('a');
        assert_eq!(state, SessionState::AwaitingStart);
        assert!(turn.is_none());
    }

    #[test]
    fn winning_hit_moves_to_round_won() {
        let (state, _) = started("ox", 10).guess('o');
        let (state, turn) = state.guess('x');
        assert!(matches!(state, SessionState::RoundWon(_)));
        assert_eq!(turn.unwrap().classification, Classification::Hit(vec![1]));
    }

    #[test]
    fn last_miss_moves_to_round_lost() {
        let mut state = started("ox", 3);
        for letter in ['q', 'r', 's'] {
            state = state.guess(letter).0;
        }
        let SessionState::RoundLost(round) = &state else {
            panic!("expected RoundLost, got {state:?}");
        };
        assert_eq!(round.tries(), 3);
        assert_eq!(round.word().text(), "ox");
    }

    #[test]
    fn duplicate_keeps_round_unchanged() {
        let (state, _) = started("cat", 10).guess('z');
        let before = state.clone();
        let (after, turn) = state.guess('z');
        assert_eq!(after, before);
        assert_eq!(turn.unwrap().classification, Classification::AlreadyGuessed);
    }

    #[test]
    fn finished_round_returns_to_awaiting_start() {
        let (won, _) = started("a", 10).guess('a');
        assert_eq!(won.next_round(), SessionState::AwaitingStart);

        let (lost, _) = started("a", 1).guess('b');
        assert!(matches!(lost, SessionState::RoundLost(_)));
        assert_eq!(lost.next_round(), SessionState::AwaitingStart);
    }

    #[test]
    fn guess_after_round_end_is_ignored() {
        let (won, _) = started("a", 10).guess('a');
        let (still_won, turn) = won.clone().guess('b');
        assert_eq!(still_won, won);
        assert!(turn.is_none());
    }
}
