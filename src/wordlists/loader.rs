//! Word list loading utilities
//!
//! Raw lines are trimmed, case-folded and filtered here; the rest of the
//! crate only ever sees validated words.

use super::FALLBACK;
use crate::core::{CollectionError, Word, WordCollection};
use std::fs;
use std::io;
use std::path::Path;

/// Load words of the given length from a file, one word per line
///
/// Lines that do not form a valid word of the requested length are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::load_from_file;
///
/// let words = load_from_file("dictionary.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed, word_length).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice list into words, skipping entries of the wrong shape
///
/// # Examples
/// ```
/// use wordle_game::wordlists::{FALLBACK, words_from_slice};
///
/// let words = words_from_slice(FALLBACK, 5);
/// assert_eq!(words.len(), FALLBACK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s, word_length).ok())
        .collect()
}

/// Build the playable collection
///
/// Uses the dictionary file when given and readable, the built-in fallback
/// list otherwise. An unreadable or empty file degrades to the fallback with
/// a logged warning, never a crash.
///
/// # Errors
/// Returns `CollectionError::Empty` when no usable words remain after
/// filtering, in which case no game can start.
pub fn load_collection(
    path: Option<&Path>,
    word_length: usize,
) -> Result<WordCollection, CollectionError> {
    let words = match path {
        Some(p) => match load_from_file(p, word_length) {
            Ok(words) if !words.is_empty() => {
                log::info!("loaded {} words from {}", words.len(), p.display());
                words
            }
            Ok(_) => {
                log::warn!(
                    "{} contains no usable {word_length}-letter words, using fallback list",
                    p.display()
                );
                words_from_slice(FALLBACK, word_length)
            }
            Err(err) => {
                log::warn!("Error reading {}: {err}; using fallback list", p.display());
                words_from_slice(FALLBACK, word_length)
            }
        },
        None => words_from_slice(FALLBACK, word_length),
    };

    WordCollection::new(words, word_length)
}
