//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O concerns.
//! All types here are pure and directly testable.

mod collection;
mod feedback;
mod validate;
mod word;

pub use collection::{CollectionError, WordCollection};
pub use feedback::{Feedback, LetterScore};
pub use validate::is_well_formed;
pub use word::{Word, WordError};
