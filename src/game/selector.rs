//! Target selection
//!
//! Draws the session's hidden answer uniformly at random from the collection.

use crate::core::{Word, WordCollection};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick a target word uniformly at random
///
/// Callers wanting reproducible games pass a seeded RNG.
///
/// # Panics
/// Will not panic - the collection is non-empty by construction.
#[must_use]
pub fn select_target<'a, R: Rng + ?Sized>(words: &'a WordCollection, rng: &mut R) -> &'a Word {
    words
        .words()
        .choose(rng)
        .expect("collection is never empty")
}
