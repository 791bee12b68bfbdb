//! Game outcome classification

use std::fmt;

/// Where a game stands, evaluated once per round before a letter is proposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Keep guessing
    InProgress,
    /// The wrong-guess budget ran out before the word was revealed
    BudgetExhausted,
    /// Every slot of the word is confirmed
    WordRevealed,
    /// No word in the list fits the evidence
    NoMatch,
}

impl GameState {
    /// Classify a game from its counters and candidate count
    ///
    /// Checks run in a fixed order: budget, then reveal, then candidates.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::GameState;
    ///
    /// assert_eq!(GameState::evaluate(6, 6, 2, 5, 10), GameState::BudgetExhausted);
    /// assert_eq!(GameState::evaluate(1, 6, 5, 5, 1), GameState::WordRevealed);
    /// assert_eq!(GameState::evaluate(1, 6, 2, 5, 0), GameState::NoMatch);
    /// assert_eq!(GameState::evaluate(1, 6, 2, 5, 3), GameState::InProgress);
    /// ```
    #[must_use]
    pub const fn evaluate(
        wrong_guesses: usize,
        max_wrong_guesses: usize,
        correct_guesses: usize,
        word_length: usize,
        candidates: usize,
    ) -> Self {
        if wrong_guesses >= max_wrong_guesses {
            Self::BudgetExhausted
        } else if correct_guesses == word_length {
            Self::WordRevealed
        } else if candidates == 0 {
            Self::NoMatch
        } else {
            Self::InProgress
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::BudgetExhausted => "guess budget exhausted",
            Self::WordRevealed => "word revealed",
            Self::NoMatch => "no matching word",
        };
        f.write_str(text)
    }
}
