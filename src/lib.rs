//! Wordle Game
//!
//! An interactive word-guessing game: a hidden target word is drawn from a word
//! list and the player has a fixed number of attempts to find it, guided by
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameConfig, GameSession, GameState};
//!
//! let config = GameConfig::default();
//! let target = Word::new("table", config.word_length).unwrap();
//! let mut session = GameSession::new(target, config);
//!
//! let report = session.submit_guess("cable").unwrap();
//! let feedback = report.feedback.unwrap();
//! assert_eq!(feedback.count_exact(), 4);
//! assert_eq!(report.state, GameState::InProgress);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
