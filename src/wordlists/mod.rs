//! Word lists for the game
//!
//! The repository side of the crate: loads candidate words from an optional
//! dictionary file, falling back to a built-in list, and hands the rest of
//! the crate a validated [`crate::core::WordCollection`].

mod embedded;
mod loader;

pub use embedded::{FALLBACK, FALLBACK_COUNT};
pub use loader::{load_collection, load_from_file, words_from_slice};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordCollection;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK.len(), FALLBACK_COUNT);
    }

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn fallback_deduplicates_to_56() {
        let words = words_from_slice(FALLBACK, 5);
        assert_eq!(words.len(), 60);

        let collection = WordCollection::new(words, 5).unwrap();
        assert_eq!(collection.len(), 56);
    }
}
