//! Hangman solving engine
//!
//! Candidate filtering, letter scoring and game state evaluation.

mod candidates;
pub mod config;
mod engine;
mod error;
pub mod scorer;
mod state;
pub mod strategy;

pub use candidates::CandidateStore;
pub use config::{ConfigError, GameConfig};
pub use engine::{Round, Solver};
pub use error::IllegalInput;
pub use scorer::LetterScores;
pub use state::GameState;
pub use strategy::{RandomStrategy, Strategy, StrategyType, UniformStrategy, WeightedStrategy};
