//! Per-game configuration

use thiserror::Error;

/// Shortest word length a game can be played with
pub const MIN_WORD_LENGTH: usize = 1;
/// Longest word length a game can be played with
pub const MAX_WORD_LENGTH: usize = 50;
/// Default number of misses allowed, one per gallows frame after the first
pub const DEFAULT_MAX_WRONG_GUESSES: usize = 6;
/// Default number of candidates shown while thinking
pub const DEFAULT_THINKING_LIMIT: usize = 10;

/// Configuration for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_wrong_guesses: usize,
    /// How many candidates to display, `None` for all of them
    pub thinking_limit: Option<usize>,
}

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Word length must be between 1 and 50, got {0}")]
    WordLength(usize),
    #[error("Guess budget must allow at least one wrong guess")]
    GuessBudget,
}

impl GameConfig {
    /// Create a configuration with default budget and display limit
    ///
    /// # Errors
    /// Returns `ConfigError::WordLength` if `word_length` is outside
    /// `MIN_WORD_LENGTH..=MAX_WORD_LENGTH`.
    pub const fn new(word_length: usize) -> Result<Self, ConfigError> {
        if word_length < MIN_WORD_LENGTH || word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::WordLength(word_length));
        }

        Ok(Self {
            word_length,
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
            thinking_limit: Some(DEFAULT_THINKING_LIMIT),
        })
    }

    /// Override the wrong-guess budget
    ///
    /// # Errors
    /// Returns `ConfigError::GuessBudget` if `max_wrong_guesses` is zero.
    pub const fn with_max_wrong_guesses(
        mut self,
        max_wrong_guesses: usize,
    ) -> Result<Self, ConfigError> {
        if max_wrong_guesses == 0 {
            return Err(ConfigError::GuessBudget);
        }
        self.max_wrong_guesses = max_wrong_guesses;
        Ok(self)
    }

    #[must_use]
    pub const fn with_thinking_limit(mut self, thinking_limit: Option<usize>) -> Self {
        self.thinking_limit = thinking_limit;
        self
    }
}
