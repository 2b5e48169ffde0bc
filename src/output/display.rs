//! Display functions for the game transcript
//!
//! Everything writes to a caller-supplied writer so the session loop can be
//! driven against an in-memory buffer.

use super::formatters::{classification_label, mask_display, tries_bar, used_letters_display};
use crate::commands::{ReplayResult, SessionSummary};
use crate::core::{Classification, RoundResult, RoundState, Turn};
use crate::session::InputError;
use colored::Colorize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 40;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Print the banner shown once before the first prompt
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_welcome<W: Write>(out: &mut W, word_count: usize, max_tries: u32) -> io::Result<()> {
    writeln!(out, "{}", rule().cyan())?;
    writeln!(out, "{}", "Welcome to Hangman game.".bright_cyan().bold())?;
    writeln!(
        out,
        "Words are loaded. There are {word_count} words in the library"
    )?;
    writeln!(out, "You can make maximum {max_tries} wrong guesses")?;
    writeln!(out, "{}", rule().cyan())
}

/// Print the partial word, wrong guesses, and tries left
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_round_state<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    writeln!(out, "{}", mask_display(round.mask()).bright_white().bold())?;
    if !round.used().is_empty() {
        writeln!(out, "Used characters: {}", used_letters_display(round.used()))?;
    }
    writeln!(
        out,
        "Tries: [{}] {}/{}",
        tries_bar(round.remaining_tries(), round.max_tries()),
        round.remaining_tries(),
        round.max_tries()
    )
}

/// Print the one-line reaction to a processed guess
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_turn_feedback<W: Write>(out: &mut W, turn: &Turn, remaining: u32) -> io::Result<()> {
    match turn.classification {
        Classification::AlreadyGuessed => writeln!(out, "{}", "Already entered!".yellow()),
        Classification::Miss => writeln!(
            out,
            "{}",
            format!("Wrong guess! Remaining number of tries : {remaining}").red()
        ),
        Classification::Hit(_) => writeln!(out, "{}", "Good guess.".green()),
    }
}

/// Print the end-of-round banner; a loss discloses the secret word
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_round_outcome<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    match round.result() {
        RoundResult::InProgress => Ok(()),
        RoundResult::Won => {
            writeln!(out, "{}", rule().cyan())?;
            writeln!(
                out,
                "{}",
                format!("Congratulations. You found {} :)", round.word())
                    .bright_green()
                    .bold()
            )?;
            writeln!(out, "Wrong guesses: {}", round.tries())
        }
        RoundResult::Lost => {
            writeln!(out, "{}", rule().cyan())?;
            writeln!(out, "You could not find it in {} tries", round.tries())?;
            writeln!(out, "{}", "You LOST the game :(".red().bold())?;
            writeln!(
                out,
                "The word was : {}",
                round.word().text().bright_yellow().bold()
            )
        }
    }
}

/// Print a rejected-input message
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_input_error<W: Write>(out: &mut W, err: &InputError) -> io::Result<()> {
    writeln!(out, "{} {err}", "Error:".red())
}

/// Print rounds played, won, and lost
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_summary<W: Write>(out: &mut W, summary: &SessionSummary) -> io::Result<()> {
    if summary.rounds_played == 0 {
        return writeln!(out, "No rounds played. Goodbye!");
    }
    writeln!(
        out,
        "Rounds played: {}  won: {}  lost: {}",
        summary.rounds_played,
        summary.rounds_won.to_string().green(),
        summary.rounds_lost.to_string().red()
    )?;
    writeln!(out, "Thanks for playing!")
}

/// Print a scripted replay turn by turn
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_replay_result<W: Write>(out: &mut W, result: &ReplayResult) -> io::Result<()> {
    writeln!(out, "\n{}", rule().cyan())?;
    writeln!(
        out,
        "Replaying: {}",
        result.word.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", rule().cyan())?;

    for (i, step) in result.steps.iter().enumerate() {
        writeln!(
            out,
            "Turn {}: '{}' {:<18} {}  tries {}",
            i + 1,
            step.letter,
            classification_label(&step.classification),
            step.mask,
            step.tries
        )?;
    }

    writeln!(out)?;
    match result.result {
        RoundResult::Won => writeln!(
            out,
            "{}",
            format!("Won with {} wrong guesses", result.tries).green().bold()
        ),
        RoundResult::Lost => writeln!(
            out,
            "{}",
            format!("Lost after {} wrong guesses", result.tries).red().bold()
        ),
        RoundResult::InProgress => writeln!(
            out,
            "{}",
            format!(
                "Unfinished: {} hidden, {} tries left",
                result.hidden, result.remaining_tries
            )
            .yellow()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Word};

    fn transcript(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn welcome_mentions_counts() {
        let text = transcript(|out| print_welcome(out, 26, 10));
        assert!(text.contains("There are 26 words in the library"));
        assert!(text.contains("maximum 10 wrong guesses"));
    }

    #[test]
    fn round_state_hides_used_line_until_a_miss() {
        let mut round = RoundState::new(Word::new("cat").unwrap(), GameConfig::new(3));
        let text = transcript(|out| print_round_state(out, &round));
        assert!(text.contains("***"));
        assert!(!text.contains("Used characters"));

        round.guess('z').unwrap();
        let text = transcript(|out| print_round_state(out, &round));
        assert!(text.contains("Used characters: z"));
        assert!(text.contains("2/3"));
    }

    #[test]
    fn round_state_with_huge_try_limit() {
        let round = RoundState::new(Word::new("cat").unwrap(), GameConfig::new(u32::MAX));
        let text = transcript(|out| print_round_state(out, &round));
        assert!(text.contains("4294967295/4294967295"));
        assert!(text.len() < 200);
    }

    #[test]
    fn lost_outcome_discloses_word() {
        let mut round = RoundState::new(Word::new("ox").unwrap(), GameConfig::new(1));
        round.guess('q').unwrap();
        let text = transcript(|out| print_round_outcome(out, &round));
        assert!(text.contains("You LOST the game"));
        assert!(text.contains("The word was : ox"));
    }

    #[test]
    fn in_progress_outcome_prints_nothing() {
        let round = RoundState::new(Word::new("ox").unwrap(), GameConfig::default());
        assert!(transcript(|out| print_round_outcome(out, &round)).is_empty());
    }
}
