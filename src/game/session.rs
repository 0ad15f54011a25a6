//! Guessing session state machine
//!
//! A session owns the hidden target and the attempt counter, and moves from
//! `InProgress` to `Won` or `Lost` as valid guesses arrive. Malformed guesses
//! never cost an attempt; finished sessions reject further guesses.

use super::{GameConfig, select_target};
use crate::core::{Feedback, Word, WordCollection};
use rand::Rng;
use std::fmt;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Attempts remain and the word has not been found
    InProgress,
    /// The target was guessed
    Won,
    /// The attempt budget ran out
    Lost,
}

impl GameState {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of one submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    /// Per-letter scores, or `None` when the raw input failed validation
    pub feedback: Option<Feedback>,
    /// Session state after this submission
    pub state: GameState,
    /// Valid guesses consumed so far
    pub attempts_used: u32,
}

/// Error returned when guessing against a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClosed;

impl fmt::Display for SessionClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session is already finished")
    }
}

impl std::error::Error for SessionClosed {}

/// One game of guessing a single hidden word
///
/// Sessions are independent values: construct as many as needed, drop them at
/// any time. The target is not readable until the session reaches a terminal
/// state.
#[derive(Debug)]
pub struct GameSession {
    target: Word,
    config: GameConfig,
    attempts_used: u32,
    state: GameState,
}

impl GameSession {
    /// Create a session around a known target
    ///
    /// The target must match the configured word length; a mismatch is a
    /// programming error upstream, not a runtime condition.
    #[must_use]
    pub fn new(target: Word, config: GameConfig) -> Self {
        debug_assert_eq!(
            target.len(),
            config.word_length,
            "target length must match configuration"
        );

        Self {
            target,
            config,
            attempts_used: 0,
            state: GameState::InProgress,
        }
    }

    /// Create a session with a target drawn at random from `words`
    #[must_use]
    pub fn start<R: Rng + ?Sized>(
        words: &WordCollection,
        config: GameConfig,
        rng: &mut R,
    ) -> Self {
        Self::new(select_target(words, rng).clone(), config)
    }

    /// Current state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Valid guesses consumed so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Valid guesses still available
    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.config.max_attempts - self.attempts_used
    }

    /// The rules this session was created with
    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// The hidden answer, revealed only once the session is over
    #[must_use]
    pub fn target_word(&self) -> Option<&str> {
        if self.state.is_terminal() {
            Some(self.target.text())
        } else {
            None
        }
    }

    /// Submit one raw guess
    ///
    /// Input is trimmed and case-folded. Malformed input yields a report with
    /// no feedback and does not touch the attempt counter, so callers can
    /// re-prompt without penalty. A well-formed guess costs one attempt and
    /// either wins the session, loses it (last attempt spent), or leaves it
    /// in progress. Feedback is returned together with the resulting state.
    ///
    /// # Errors
    /// Returns [`SessionClosed`] when the session is already `Won` or `Lost`.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, SessionClosed> {
        if self.state.is_terminal() {
            return Err(SessionClosed);
        }

        // Malformed input never reaches the transition step
        let Ok(guess) = Word::new(raw.trim(), self.config.word_length) else {
            return Ok(self.report(None));
        };

        let feedback = Feedback::evaluate(&self.target, &guess);
        self.attempts_used += 1;

        if guess == self.target {
            self.state = GameState::Won;
        } else if self.attempts_used >= self.config.max_attempts {
            self.state = GameState::Lost;
        }

        Ok(self.report(Some(feedback)))
    }

    fn report(&self, feedback: Option<Feedback>) -> GuessReport {
        GuessReport {
            feedback,
            state: self.state,
            attempts_used: self.attempts_used,
        }
    }
}
