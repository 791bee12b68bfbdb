//! Word solving command
//!
//! Plays a full game against a known word, deriving each round's evidence
//! from it, and returns the rounds played.

use crate::core::{Evidence, Word};
use crate::solver::config::DEFAULT_MAX_WRONG_GUESSES;
use crate::solver::{GameConfig, GameState, Round, Solver, Strategy};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_wrong_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub outcome: GameState,
    pub rounds: Vec<Round>,
    pub wrong_guesses: usize,
    pub max_wrong_guesses: usize,
    /// Candidates left when the game ended
    pub remaining: Vec<String>,
}

impl SolveResult {
    #[must_use]
    pub fn revealed(&self) -> bool {
        self.outcome == GameState::WordRevealed
    }
}

/// Solve a specific word using the given strategy
///
/// The target does not have to be in `words`; a word the list lacks usually
/// ends in [`GameState::NoMatch`].
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word
/// - Its length or the guess budget is out of range
///
/// # Examples
/// ```
/// use hangman_solver::commands::{SolveConfig, solve_word};
/// use hangman_solver::solver::{GameState, WeightedStrategy};
/// use hangman_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "car", "can"]);
/// let result = solve_word(&SolveConfig::new("can".to_string()), WeightedStrategy, &words).unwrap();
/// assert_eq!(result.outcome, GameState::WordRevealed);
/// ```
pub fn solve_word<S: Strategy>(
    config: &SolveConfig,
    strategy: S,
    words: &[Word],
) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str(), 1)
        .with_context(|| format!("Invalid target word {:?}", config.target))?;

    let game = GameConfig::new(target.len())?.with_max_wrong_guesses(config.max_wrong_guesses)?;
    let mut solver = Solver::new(strategy, words, game);

    while solver.state() == GameState::InProgress {
        let Some(letter) = solver.next_guess() else {
            bail!("No letter left to propose for {:?}", target.text());
        };
        solver.apply(Evidence::from_answer(target.text(), letter))?;
    }

    Ok(SolveResult {
        target: target.text().to_string(),
        outcome: solver.state(),
        rounds: solver.rounds().to_vec(),
        wrong_guesses: solver.wrong_guesses(),
        max_wrong_guesses: game.max_wrong_guesses,
        remaining: solver
            .candidates()
            .iter()
            .map(|w| w.text().to_string())
            .collect(),
    })
}
