//! Hangman Solver
//!
//! The computer guesses a word the player is thinking of. It keeps every word
//! of the right length that agrees with the evidence so far and guesses the
//! letter that the most (and most common) remaining words contain.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::Evidence;
//! use hangman_solver::solver::{GameConfig, GameState, Solver, WeightedStrategy};
//! use hangman_solver::wordlists::loader::embedded_words;
//!
//! let words = embedded_words();
//! let mut solver = Solver::new(WeightedStrategy, &words, GameConfig::new(3).unwrap());
//!
//! // The player is thinking of "the"
//! while solver.state() == GameState::InProgress {
//!     let letter = solver.next_guess().unwrap();
//!     solver.apply(Evidence::from_answer("the", letter)).unwrap();
//! }
//! assert_eq!(solver.state(), GameState::WordRevealed);
//! ```

// Core domain types
pub mod core;

// Candidate filtering and letter selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
