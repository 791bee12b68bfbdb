//! Alphabet helpers and the guessed-letter set
//!
//! Letters are handled as ASCII bytes `b'a'..=b'z'` throughout the crate and
//! mapped to an alphabetic index (0-25) wherever a fixed-size table is needed.

use std::fmt;

/// Number of letters in the alphabet the solver works with
pub const ALPHABET_LEN: usize = 26;

/// Map a letter to its alphabetic index (`'a'` -> 0, `'z'` -> 25)
///
/// Uppercase letters are folded to lowercase. Returns `None` for anything
/// outside `a-z`.
///
/// # Examples
/// ```
/// use hangman_solver::core::alphabetic_index;
///
/// assert_eq!(alphabetic_index(b'a'), Some(0));
/// assert_eq!(alphabetic_index(b'Z'), Some(25));
/// assert_eq!(alphabetic_index(b'3'), None);
/// ```
#[inline]
#[must_use]
pub const fn alphabetic_index(letter: u8) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower - b'a') as usize)
    } else {
        None
    }
}

/// Map an alphabetic index back to its letter (0 -> `'a'`)
///
/// # Panics
/// Panics in debug mode if `index >= 26`
#[inline]
#[must_use]
pub const fn letter_at(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_LEN, "alphabetic index must be < 26");
    b'a' + index as u8
}

/// A set of letters stored as a 26-bit mask
///
/// Bit `i` is set when the letter with alphabetic index `i` is a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Insert a letter, returning `true` if it was not already present
    ///
    /// Non-letters are ignored and return `false`.
    pub fn insert(&mut self, letter: u8) -> bool {
        match alphabetic_index(letter) {
            Some(index) => {
                let bit = 1 << index;
                let fresh = self.0 & bit == 0;
                self.0 |= bit;
                fresh
            }
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        alphabetic_index(letter).is_some_and(|index| self.contains_index(index))
    }

    #[inline]
    #[must_use]
    pub const fn contains_index(self, index: usize) -> bool {
        index < ALPHABET_LEN && self.0 & (1 << index) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over members in alphabetic order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_LEN)
            .filter(move |&index| self.contains_index(index))
            .map(letter_at)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabetic_index_round_trips_every_letter() {
        for (index, letter) in (b'a'..=b'z').enumerate() {
            assert_eq!(alphabetic_index(letter), Some(index));
            assert_eq!(letter_at(index), letter);
        }
    }

    #[test]
    fn alphabetic_index_rejects_non_letters() {
        assert_eq!(alphabetic_index(b'0'), None);
        assert_eq!(alphabetic_index(b' '), None);
        assert_eq!(alphabetic_index(b'{'), None);
        assert_eq!(alphabetic_index(b'`'), None);
    }

    #[test]
    fn insert_reports_freshness() {
        let mut set = LetterSet::new();
        assert!(set.insert(b'e'));
        assert!(!set.insert(b'e'));
        assert!(!set.insert(b'E'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insert_ignores_non_letters() {
        let mut set = LetterSet::new();
        assert!(!set.insert(b'#'));
        assert!(set.is_empty());
    }

    #[test]
    fn contains_checks_membership() {
        let set: LetterSet = b"hangman".iter().copied().collect();
        assert!(set.contains(b'h'));
        assert!(set.contains(b'n'));
        assert!(!set.contains(b'z'));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn iter_is_alphabetic() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz".to_vec());
        assert_eq!(set.to_string(), "aberz");
    }
}
