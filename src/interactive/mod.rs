//! Interactive play
//!
//! The full-screen terminal UI and the parsing of what the player types.

pub mod app;
pub mod input;
mod rendering;

pub use app::{App, run_tui};
pub use input::{PositionsError, parse_positions, parse_word_length};
