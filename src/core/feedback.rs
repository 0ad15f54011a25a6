//! Per-letter guess feedback
//!
//! Feedback classifies every position of a guess against the hidden target:
//! Exact (right letter, right spot), Present (letter occurs elsewhere in the
//! target) or Absent. Duplicate letters follow the consuming rule: each target
//! letter can satisfy at most one guess position.

use super::Word;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Right letter in the right position
    Exact,
    /// Letter occurs in the target at a different position
    Present,
    /// Letter does not occur in the target (or every copy is spoken for)
    Absent,
}

/// Ordered per-position feedback for one guess
///
/// Immutable once produced; holds no reference back to the session that
/// requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    scores: Vec<LetterScore>,
}

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// Both words must have the same length. Unequal lengths are a caller bug:
    /// guesses are validated before they reach the engine, so this is only a
    /// debug assertion, not a runtime error path.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and consume those letters
    ///    from the target's availability pool.
    /// 2. Second pass: mark remaining guess letters Present while unconsumed
    ///    copies of the letter remain in the pool, Absent otherwise.
    ///
    /// A letter occurring once in the target is never credited twice, so a
    /// doubled guess letter against a single target copy scores one Present
    /// and one Absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterScore, Word};
    ///
    /// let target = Word::new("table", 5).unwrap();
    /// let guess = Word::new("peach", 5).unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    ///
    /// // P(absent) E(present) A(present) C(absent) H(absent)
    /// assert_eq!(
    ///     feedback.scores(),
    ///     &[
    ///         LetterScore::Absent,
    ///         LetterScore::Present,
    ///         LetterScore::Present,
    ///         LetterScore::Absent,
    ///         LetterScore::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        debug_assert_eq!(
            target.len(),
            guess.len(),
            "target and guess must have equal length"
        );

        let mut scores = vec![LetterScore::Absent; guess.len()];
        let mut available = target.char_counts();

        // First pass: exact matches consume their target letter
        for (i, &letter) in guess.bytes().iter().enumerate() {
            if letter == target.char_at(i) {
                scores[i] = LetterScore::Exact;

                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters draw from the unconsumed pool
        for (i, &letter) in guess.bytes().iter().enumerate() {
            if scores[i] == LetterScore::Absent
                && let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                scores[i] = LetterScore::Present;
                *count -= 1;
            }
        }

        Self { scores }
    }

    /// The per-position classifications, in guess order
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[LetterScore] {
        &self.scores
    }

    /// True when every position is Exact (the guess is the target)
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        self.scores.iter().all(|&s| s == LetterScore::Exact)
    }

    /// Number of Exact positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.scores
            .iter()
            .filter(|&&s| s == LetterScore::Exact)
            .count()
    }

    /// Number of Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.scores
            .iter()
            .filter(|&&s| s == LetterScore::Present)
            .count()
    }

    /// Compact one-character-per-position encoding
    ///
    /// Exact positions show the guess letter uppercase, Present positions show
    /// it lowercase, Absent positions show `_`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let target = Word::new("table", 5).unwrap();
    /// let guess = Word::new("water", 5).unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    /// assert_eq!(feedback.marks(&guess), "_Ate_");
    /// ```
    ///
    /// # Panics
    /// Will not panic - guess letters are validated ASCII.
    #[must_use]
    pub fn marks(&self, guess: &Word) -> String {
        self.scores
            .iter()
            .zip(guess.bytes())
            .map(|(&score, &letter)| match score {
                LetterScore::Exact => letter.to_ascii_uppercase() as char,
                LetterScore::Present => letter as char,
                LetterScore::Absent => '_',
            })
            .collect()
    }

    /// Render as an emoji row: 🟩 Exact, 🟨 Present, ⬜ Absent
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.scores
            .iter()
            .map(|&score| match score {
                LetterScore::Exact => '🟩',
                LetterScore::Present => '🟨',
                LetterScore::Absent => '⬜',
            })
            .collect()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
