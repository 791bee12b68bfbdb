//! Partially revealed word template
//!
//! A pattern holds one slot per letter of the hidden word. Each slot is either
//! unknown or confirmed to a letter; a confirmed slot never reverts.

use super::letters::alphabetic_index;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The revealed state of the hidden word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

/// Error returned when parsing a pattern string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must have at least one slot")]
    Empty,
    #[error("Invalid pattern character {0:?}, use letters and '_' or '.' for unknown slots")]
    InvalidCharacter(char),
}

impl Pattern {
    /// Create a pattern of `length` unknown slots
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Number of slots (the word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Letter confirmed at `position`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    /// All slots in order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// Iterate over the positions that are still unknown
    pub fn unknown_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
    }

    /// Number of confirmed slots
    #[must_use]
    pub fn confirmed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True once every slot is confirmed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Confirm `letter` at `position`
    ///
    /// Callers validate beforehand; confirming an out-of-range or already
    /// confirmed slot is a logic error.
    pub(crate) fn confirm(&mut self, position: usize, letter: u8) {
        debug_assert!(self.slots[position].is_none(), "slot confirmed twice");
        self.slots[position] = Some(letter);
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern like `"_a_"` or `"h.ng.an"`
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern: Pattern = "_A_".parse().unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.get(1), Some(b'a'));
    /// assert_eq!(pattern.get(0), None);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slots = s
            .trim()
            .chars()
            .map(|ch| match ch {
                '_' | '.' => Ok(None),
                _ => u8::try_from(ch)
                    .ok()
                    .filter(|&b| alphabetic_index(b).is_some())
                    .map(|b| Some(b.to_ascii_lowercase()))
                    .ok_or(PatternError::InvalidCharacter(ch)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if slots.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self { slots })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{}", *letter as char)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}
