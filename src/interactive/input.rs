//! Parsing of what the player types
//!
//! Positions are entered 1-based, the way they are labelled on screen, and
//! converted to 0-based positions here.

use crate::solver::config::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use std::collections::BTreeSet;
use thiserror::Error;

/// Error type for an unusable position or length entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionsError {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("Position {position} is outside 1-{length}")]
    OutOfRange { position: usize, length: usize },
    #[error("Word length must be between {min} and {max}, got {got}")]
    LengthOutOfRange { got: usize, min: usize, max: usize },
}

/// Parse the positions of a guessed letter
///
/// An empty line means the letter is not in the word and yields an empty set.
///
/// # Errors
/// Returns `PositionsError` for a token that is not a number or an index
/// outside `1..=length`.
///
/// # Examples
/// ```
/// use hangman_solver::interactive::parse_positions;
///
/// let positions = parse_positions("1 3", 4).unwrap();
/// assert_eq!(positions.into_iter().collect::<Vec<_>>(), vec![0, 2]);
/// assert!(parse_positions("", 4).unwrap().is_empty());
/// assert!(parse_positions("5", 4).is_err());
/// ```
pub fn parse_positions(line: &str, length: usize) -> Result<BTreeSet<usize>, PositionsError> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let position: usize = token
                .parse()
                .map_err(|_| PositionsError::NotANumber(token.to_string()))?;
            if position == 0 || position > length {
                return Err(PositionsError::OutOfRange { position, length });
            }
            Ok(position - 1)
        })
        .collect()
}

/// Parse a word length entry
///
/// # Errors
/// Returns `PositionsError` if the entry is not a number or is outside the
/// supported range.
pub fn parse_word_length(line: &str) -> Result<usize, PositionsError> {
    let trimmed = line.trim();
    let length: usize = trimmed
        .parse()
        .map_err(|_| PositionsError::NotANumber(trimmed.to_string()))?;

    if (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(PositionsError::LengthOutOfRange {
            got: length,
            min: MIN_WORD_LENGTH,
            max: MAX_WORD_LENGTH,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(positions: &[usize]) -> BTreeSet<usize> {
        positions.iter().copied().collect()
    }

    #[test]
    fn empty_line_is_a_miss() {
        assert!(parse_positions("", 5).unwrap().is_empty());
        assert!(parse_positions("   ", 5).unwrap().is_empty());
    }

    #[test]
    fn positions_become_zero_based() {
        assert_eq!(parse_positions("1 5", 5).unwrap(), set(&[0, 4]));
        assert_eq!(parse_positions(" 2,3 ", 5).unwrap(), set(&[1, 2]));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(parse_positions("2 2", 3).unwrap(), set(&[1]));
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(
            parse_positions("0", 3),
            Err(PositionsError::OutOfRange { position: 0, length: 3 })
        );
        assert_eq!(
            parse_positions("1 4", 3),
            Err(PositionsError::OutOfRange { position: 4, length: 3 })
        );
    }

    #[test]
    fn non_numbers_are_rejected() {
        assert_eq!(
            parse_positions("1 x", 3),
            Err(PositionsError::NotANumber("x".to_string()))
        );
        assert!(parse_positions("-1", 3).is_err());
    }

    #[test]
    fn word_length_bounds() {
        assert_eq!(parse_word_length(" 7\n"), Ok(7));
        assert_eq!(parse_word_length("1"), Ok(1));
        assert_eq!(parse_word_length("50"), Ok(50));
        assert!(matches!(
            parse_word_length("0"),
            Err(PositionsError::LengthOutOfRange { got: 0, .. })
        ));
        assert!(parse_word_length("51").is_err());
        assert!(parse_word_length("seven").is_err());
    }
}
