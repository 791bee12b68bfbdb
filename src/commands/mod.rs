//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_pattern};
pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use simple::{SimpleConfig, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_word};
