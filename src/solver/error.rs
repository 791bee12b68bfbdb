//! Rejected evidence

use super::state::GameState;
use thiserror::Error;

/// Evidence that contradicts the game so far
///
/// Returned before anything is mutated; the caller can fix the input and
/// submit again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalInput {
    #[error("The game is already over: {0}")]
    GameOver(GameState),
    #[error("{0:?} is not a letter a-z")]
    InvalidLetter(char),
    #[error("Letter '{0}' was already guessed")]
    AlreadyGuessed(char),
    #[error("A hit needs at least one position")]
    NoPositions,
    #[error("Position {} is past the end of a {length}-letter word", .position + 1)]
    PositionOutOfRange { position: usize, length: usize },
    #[error("Position {} is already revealed as '{letter}'", .position + 1)]
    PositionRevealed { position: usize, letter: char },
}
