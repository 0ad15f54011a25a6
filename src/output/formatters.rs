//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore};
use colored::Colorize;

/// Render a guess as a colored letter row
///
/// Exact letters come out green, Present letters yellow, Absent letters
/// dimmed. Letters are uppercased for display.
#[must_use]
pub fn colorize_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .to_uppercase()
        .chars()
        .zip(feedback.scores())
        .map(|(ch, &score)| {
            let cell = format!(" {ch} ");
            match score {
                LetterScore::Exact => cell.bright_green().bold().to_string(),
                LetterScore::Present => cell.bright_yellow().bold().to_string(),
                LetterScore::Absent => cell.bright_black().to_string(),
            }
        })
        .collect()
}

/// Compact one-character-per-position feedback string
///
/// Exact positions show the guess letter uppercase, Present positions show it
/// lowercase, Absent positions show `_`.
#[must_use]
pub fn feedback_marks(guess: &str, feedback: &Feedback) -> String {
    guess
        .to_lowercase()
        .chars()
        .zip(feedback.scores())
        .map(|(ch, &score)| match score {
            LetterScore::Exact => ch.to_ascii_uppercase(),
            LetterScore::Present => ch,
            LetterScore::Absent => '_',
        })
        .collect()
}
