//! Ranked dictionary word
//!
//! A Word stores its lowercase text together with its commonality rank, the
//! 1-based position it held in the frequency-ordered source list.

use super::letters::LetterSet;
use std::fmt;
use thiserror::Error;

/// A lowercase word tagged with its commonality rank
///
/// Rank 1 is the most common word in the source. The rank is fixed when the
/// word is loaded and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    rank: u32,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only letters a-z, got {0:?}")]
    InvalidCharacters(String),
    #[error("Word rank must be at least 1")]
    ZeroRank,
}

impl Word {
    /// Create a new Word from a string and its rank in the source list
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - The text contains anything other than ASCII letters
    /// - The rank is zero
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("Hangman", 42).unwrap();
    /// assert_eq!(word.text(), "hangman");
    /// assert_eq!(word.rank(), 42);
    ///
    /// assert!(Word::new("don't", 1).is_err());
    /// assert!(Word::new("word", 0).is_err());
    /// ```
    pub fn new(text: impl Into<String>, rank: u32) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        if rank == 0 {
            return Err(WordError::ZeroRank);
        }

        let letters = text.bytes().collect();

        Ok(Self {
            text,
            rank,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false, a Word holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Commonality rank, 1 = most common
    #[inline]
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    /// Scoring weight of this word, `1 / rank`
    #[inline]
    #[must_use]
    pub fn weight(&self) -> f64 {
        1.0 / f64::from(self.rank)
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// Set of distinct letters used by the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Iterate over every position holding `letter`
    pub fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.chars()
            .iter()
            .enumerate()
            .filter(move |&(_, &ch)| ch == letter)
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
