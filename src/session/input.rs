//! Parsing of player input lines

use thiserror::Error;

/// Rejected input; the caller reports it and asks again
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("You can only enter one character")]
    WrongLength(usize),
    #[error("Please answer 'y' or 'n'")]
    UnrecognizedOption(String),
}

/// Parse a start/continue answer
///
/// Only the first whitespace-separated token counts, compared case-insensitively.
///
/// # Errors
/// Returns `InputError::UnrecognizedOption` for anything but `y` or `n`,
/// including a blank line.
pub fn parse_confirmation(line: &str) -> Result<bool, InputError> {
    let token = line
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();

    match token.as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(InputError::UnrecognizedOption(token)),
    }
}

/// Parse a guessed letter, lowercased
///
/// Only the line terminator is stripped; exactly one character must remain.
///
/// # Errors
/// Returns `InputError::WrongLength` with the number of characters entered.
pub fn parse_guess(line: &str) -> Result<char, InputError> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    let mut chars = trimmed.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c.to_lowercase().next().unwrap_or(c)),
        _ => Err(InputError::WrongLength(trimmed.chars().count())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_accepts_y_and_n() {
        assert_eq!(parse_confirmation("y"), Ok(true));
        assert_eq!(parse_confirmation("N\n"), Ok(false));
        assert_eq!(parse_confirmation("  Y please"), Ok(true));
    }

    #[test]
    fn confirmation_rejects_other_tokens() {
        assert!(matches!(
            parse_confirmation("yes"),
            Err(InputError::UnrecognizedOption(t)) if t == "yes"
        ));
        assert!(parse_confirmation("maybe").is_err());
        assert!(parse_confirmation("").is_err());
        assert!(parse_confirmation("   \n").is_err());
    }

    #[test]
    fn guess_accepts_single_character() {
        assert_eq!(parse_guess("a"), Ok('a'));
        assert_eq!(parse_guess("Q\n"), Ok('q'));
        assert_eq!(parse_guess("e\r\n"), Ok('e'));
    }

    #[test]
    fn guess_rejects_padded_letter() {
        assert_eq!(parse_guess(" a "), Err(InputError::WrongLength(3)));
        assert_eq!(parse_guess("a \t\n"), Err(InputError::WrongLength(3)));
        assert_eq!(parse_guess(" a\n"), Err(InputError::WrongLength(2)));
    }

    #[test]
    fn guess_rejects_empty_and_multiple() {
        assert_eq!(parse_guess(""), Err(InputError::WrongLength(0)));
        assert_eq!(parse_guess("\n"), Err(InputError::WrongLength(0)));
        assert_eq!(parse_guess("ab"), Err(InputError::WrongLength(2)));
        assert_eq!(parse_guess("a b"), Err(InputError::WrongLength(3)));
    }

    #[test]
    fn error_messages_are_one_line() {
        for err in [
            InputError::WrongLength(2),
            InputError::UnrecognizedOption("x".into()),
        ] {
            assert!(!err.to_string().contains('\n'));
        }
    }
}
