//! Core domain types for hangman
//!
//! Words with their commonality rank, the revealed pattern, the guessed-letter
//! set and the evidence disclosed after each guess.

mod evidence;
mod letters;
mod pattern;
mod word;

pub use evidence::Evidence;
pub use letters::{ALPHABET_LEN, LetterSet, alphabetic_index, letter_at};
pub use pattern::{Pattern, PatternError};
pub use word::{Word, WordError};
