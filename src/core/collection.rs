//! Candidate word collections
//!
//! A `WordCollection` is an immutable, non-empty, de-duplicated list of
//! same-length words. It is built once at startup and handed around by
//! reference; there is no shared mutable word list anywhere in the crate.

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// The pool of candidate answers for a game
#[derive(Debug, Clone)]
pub struct WordCollection {
    words: Vec<Word>,
}

/// Error building a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// No candidate words of the required length were available
    Empty { word_length: usize },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { word_length } => {
                write!(f, "No valid {word_length}-letter words found")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

impl WordCollection {
    /// Build a collection from candidate words
    ///
    /// Words of the wrong length are dropped, duplicates are removed keeping
    /// first-seen order.
    ///
    /// # Errors
    /// Returns `CollectionError::Empty` when no words remain after filtering.
    pub fn new(words: Vec<Word>, word_length: usize) -> Result<Self, CollectionError> {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| w.len() == word_length)
            .filter(|w| seen.insert(w.clone()))
            .collect();

        if words.is_empty() {
            return Err(CollectionError::Empty { word_length });
        }

        Ok(Self { words })
    }

    /// The candidate words, in first-seen order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of distinct candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty collections cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}
