//! Formatting utilities for terminal output

use crate::core::{Classification, RevealMask, UsedLetters};

/// Format the partially revealed word, one slot per character
#[must_use]
pub fn mask_display(mask: &RevealMask) -> String {
    mask.to_string()
}

/// Format wrong guesses in the order they were made, e.g. `q, r, s`
#[must_use]
pub fn used_letters_display(used: &UsedLetters) -> String {
    used.letters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Width of the tries bar, independent of the try limit
pub const TRIES_BAR_WIDTH: usize = 10;

/// Create a bar showing how many tries are left, scaled to a fixed width
#[must_use]
pub fn tries_bar(remaining: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        // Values are clamped to [0, TRIES_BAR_WIDTH]
        (u64::from(remaining.min(max)) * TRIES_BAR_WIDTH as u64 / u64::from(max)) as usize
    };

    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(TRIES_BAR_WIDTH - filled)
    )
}

/// One-word label for a classification
#[must_use]
pub fn classification_label(classification: &Classification) -> String {
    match classification {
        Classification::AlreadyGuessed => "already guessed".to_string(),
        Classification::Miss => "miss".to_string(),
        Classification::Hit(positions) => {
            let list = positions
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("hit [{list}]")
        }
    }
}
