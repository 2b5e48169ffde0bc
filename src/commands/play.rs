//! Interactive hangman session
//!
//! Line-based game loop: offer a round, take guesses until the word is found
//! or the tries run out, then offer another. Invalid input is reported and the
//! same prompt is repeated; end of input ends the session.

use crate::core::{GameConfig, RoundResult, RoundState};
use crate::output::{
    print_input_error, print_round_outcome, print_round_state, print_summary,
    print_turn_feedback, print_welcome,
};
use crate::session::{SessionState, parse_confirmation, parse_guess};
use crate::wordlists::WordSource;
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

const START_PROMPT: &str = "Do you want to start?(y/n) ";
const GUESS_PROMPT: &str = "?> ";

/// Rounds finished during one session (kept in memory only)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

/// Load the word list at `path` and run a session with it
///
/// Nothing is written to `out` when the word list cannot be used.
///
/// # Errors
///
/// Returns an error if the word list is missing, unreadable, or has no valid
/// words, or on an I/O error while playing.
pub fn play_from_file<P, R, W, G>(
    path: P,
    input: &mut R,
    out: &mut W,
    config: GameConfig,
    rng: &mut G,
) -> Result<SessionSummary>
where
    P: AsRef<Path>,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let path = path.as_ref();
    let words = load_from_file(path).context("No words to guess. Terminating the program")?;
    let source = WordSource::new(words)
        .with_context(|| format!("no words to guess in {}", path.display()))?;

    run_play(&source, input, out, config, rng)
}

/// Run the interactive session until the player declines or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, W, G>(
    source: &WordSource,
    input: &mut R,
    out: &mut W,
    config: GameConfig,
    rng: &mut G,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    print_welcome(out, source.len(), config.max_tries)?;

    let mut summary = SessionSummary::default();
    let mut state = SessionState::AwaitingStart;

    loop {
        state = match std::mem::take(&mut state) {
            SessionState::AwaitingStart => match prompt_confirmation(input, out)? {
                Some(true) => {
                    let word = source.choose(rng).clone();
                    SessionState::AwaitingStart.start(word, config)
                }
                Some(false) | None => SessionState::AwaitingStart.decline(),
            },
            SessionState::InRound(round) => {
                print_round_state(out, &round)?;
                let Some(letter) = prompt_guess(input, out)? else {
                    info!("input closed during a round");
                    break;
                };

                let (next, turn) = SessionState::InRound(round).guess(letter);
                if let Some(turn) = turn {
                    let remaining = next.round().map_or(0, RoundState::remaining_tries);
                    print_turn_feedback(out, &turn, remaining)?;
                }
                next
            }
            finished @ (SessionState::RoundWon(_) | SessionState::RoundLost(_)) => {
                if let Some(round) = finished.round() {
                    print_round_outcome(out, round)?;
                    summary.rounds_played += 1;
                    match round.result() {
                        RoundResult::Won => summary.rounds_won += 1,
                        RoundResult::Lost => summary.rounds_lost += 1,
                        RoundResult::InProgress => {}
                    }
                }
                finished.next_round()
            }
            SessionState::Ended => break,
        };
    }

    info!(
        played = summary.rounds_played,
        won = summary.rounds_won,
        lost = summary.rounds_lost,
        "session ended"
    );
    print_summary(out, &summary)?;
    out.flush()?;
    Ok(summary)
}

/// Ask until the player answers y or n; `None` on end of input
fn prompt_confirmation<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<bool>> {
    loop {
        let Some(line) = prompt_line(input, out, START_PROMPT)? else {
            return Ok(None);
        };
        match parse_confirmation(&line) {
            Ok(answer) => return Ok(Some(answer)),
            Err(e) => print_input_error(out, &e)?,
        }
    }
}

/// Ask until the player enters a single character; `None` on end of input
fn prompt_guess<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<char>> {
    loop {
        let Some(line) = prompt_line(input, out, GUESS_PROMPT)? else {
            return Ok(None);
        };
        match parse_guess(&line) {
            Ok(letter) => return Ok(Some(letter)),
            Err(e) => print_input_error(out, &e)?,
        }
    }
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read player input")?;
    if read == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line))
}
