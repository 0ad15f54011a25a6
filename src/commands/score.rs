//! One-shot feedback inspection
//!
//! Scores a single target/guess pair without running a session. Handy for
//! checking how a particular pairing comes out.

use crate::core::{Feedback, Word, WordError};

/// A scored target/guess pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
/// Returns `WordError` when either input is not a well-formed word of the
/// given length.
pub fn score_pair(target: &str, guess: &str, word_length: usize) -> Result<ScoreResult, WordError> {
    let target = Word::new(target, word_length)?;
    let guess = Word::new(guess, word_length)?;
    let feedback = Feedback::evaluate(&target, &guess);

    Ok(ScoreResult {
        target,
        guess,
        feedback,
    })
}
