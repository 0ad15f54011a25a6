//! Terminal output formatting
//!
//! Display utilities for the interactive game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_guess_feedback, print_loss, print_score_result, print_welcome, print_win};
