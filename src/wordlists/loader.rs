//! Word list loading utilities
//!
//! A word list is a sequence of whitespace-separated tokens ordered from most
//! to least common. Each token takes the next rank, starting at 1, whether or
//! not it turns into a [`Word`]. Tokens are lowercased; tokens holding anything
//! other than letters are skipped.

use crate::core::Word;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// Rank words by their position in `tokens`
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::ranked_words;
///
/// let words = ranked_words("the of don't and".split_whitespace());
/// let ranks: Vec<u32> = words.iter().map(|w| w.rank()).collect();
/// assert_eq!(ranks, vec![1, 2, 4]);
/// ```
pub fn ranked_words<'a, I>(tokens: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .zip(1..=u32::MAX)
        .filter_map(|(token, rank)| match Word::new(token, rank) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!("Skipping word list entry {token:?} at rank {rank}: {e}");
                None
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = ranked_words(content.split_whitespace());

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to ranked words
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// assert_eq!(words[0].rank(), 1);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    ranked_words(slice.iter().copied())
}

/// The embedded list as ranked words
#[must_use]
pub fn embedded_words() -> Vec<Word> {
    words_from_slice(super::WORDS)
}
