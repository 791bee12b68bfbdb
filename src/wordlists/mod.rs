//! Word lists for hangman solving
//!
//! Provides the embedded frequency-ordered list compiled into the binary and
//! loaders for user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn most_common_words_come_first() {
        assert_eq!(&WORDS[..3], &["the", "of", "and"]);
    }

    #[test]
    fn list_covers_many_lengths() {
        for length in 1..=12 {
            assert!(
                WORDS.iter().any(|w| w.len() == length),
                "No word of length {length}"
            );
        }
    }
}
