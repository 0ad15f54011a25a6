//! Guess well-formedness checks
//!
//! A guess is acceptable when it has the expected length and contains only
//! ASCII letters, regardless of case. Dictionary membership is deliberately
//! not checked: any well-formed word may be guessed, whether or not it could
//! ever be an answer.

use super::Word;

/// Check whether a raw guess string is acceptable for evaluation
///
/// Delegates to [`Word`] parsing so the predicate and the parser can never
/// disagree about what counts as a word.
///
/// # Examples
/// ```
/// use wordle_game::core::is_well_formed;
///
/// assert!(is_well_formed("GRAPE", 5));
/// assert!(!is_well_formed("grapes", 5));
/// assert!(!is_well_formed("gr4pe", 5));
/// ```
#[must_use]
pub fn is_well_formed(input: &str, word_length: usize) -> bool {
    Word::new(input, word_length).is_ok()
}
