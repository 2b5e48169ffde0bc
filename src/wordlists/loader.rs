//! Word list loading utilities
//!
//! Reads one word per line from a plain text file, skipping blanks and
//! anything that is not a valid [`Word`].

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Word list file used when none is given
pub const DEFAULT_WORDLIST: &str = "wordlist.txt";

/// Failure to produce a usable word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no words to guess in {}", .path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file
///
/// Returns the valid words in file order, lowercased.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Empty`
/// if it contains no valid word.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines());
    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(count = words.len(), path = %path.display(), "word list loaded");
    Ok(words)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(line = index + 1, entry = trimmed, "skipping word list entry: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "", "ox"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}
