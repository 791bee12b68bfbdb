//! Evidence disclosed by the word holder after each guess
//!
//! A guess either hits (the letter occurs at one or more positions) or misses
//! (the letter occurs nowhere in the word).

use std::collections::BTreeSet;
use std::fmt;

/// What the word holder revealed about a guessed letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    /// The letter occurs at exactly these 0-based positions
    Hit { letter: u8, positions: BTreeSet<usize> },
    /// The letter does not occur in the word
    Miss { letter: u8 },
}

impl Evidence {
    /// Build a hit from any collection of positions
    pub fn hit(letter: u8, positions: impl IntoIterator<Item = usize>) -> Self {
        Self::Hit {
            letter: letter.to_ascii_lowercase(),
            positions: positions.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn miss(letter: u8) -> Self {
        Self::Miss {
            letter: letter.to_ascii_lowercase(),
        }
    }

    /// Derive the evidence a known `answer` gives for `letter`
    ///
    /// Used for self-play, where the hidden word is known in advance.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Evidence;
    ///
    /// assert_eq!(Evidence::from_answer("banana", b'a'), Evidence::hit(b'a', [1, 3, 5]));
    /// assert_eq!(Evidence::from_answer("banana", b'z'), Evidence::miss(b'z'));
    /// ```
    #[must_use]
    pub fn from_answer(answer: &str, letter: u8) -> Self {
        let positions: BTreeSet<usize> = answer
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch.eq_ignore_ascii_case(&letter))
            .map(|(i, _)| i)
            .collect();

        if positions.is_empty() {
            Self::miss(letter)
        } else {
            Self::Hit {
                letter: letter.to_ascii_lowercase(),
                positions,
            }
        }
    }

    /// The letter this evidence is about
    #[must_use]
    pub const fn letter(&self) -> u8 {
        match self {
            Self::Hit { letter, .. } | Self::Miss { letter } => *letter,
        }
    }

    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit { letter, positions } => {
                let shown: Vec<String> = positions.iter().map(|p| (p + 1).to_string()).collect();
                write!(
                    f,
                    "{} at {}",
                    (*letter as char).to_ascii_uppercase(),
                    shown.join(" ")
                )
            }
            Self::Miss { letter } => write!(f, "{} missed", (*letter as char).to_ascii_uppercase()),
        }
    }
}
