//! Position analysis command
//!
//! Rebuilds a game from a revealed pattern and the letters already missed,
//! then reports what the solver sees from there.

use crate::core::{Evidence, LetterSet, Pattern, Word};
use crate::solver::{GameConfig, GameState, Solver, Strategy};
use anyhow::{Context, Result};

/// Result of analyzing a position
pub struct AnalysisResult {
    pub pattern: Pattern,
    pub state: GameState,
    pub proposal: Option<u8>,
    pub total_candidates: usize,
    /// Leading candidates, most common first
    pub candidates: Vec<String>,
    /// Weighted letter scores, best first
    pub scores: Vec<(u8, f64)>,
    pub wrong_guesses: usize,
    pub max_wrong_guesses: usize,
}

/// Parsed pattern plus the evidence that reproduces it and `misses` on a
/// fresh game
///
/// # Errors
///
/// Returns an error if the pattern does not parse.
pub fn evidence_for(pattern: &str, misses: &str) -> Result<(Pattern, Vec<Evidence>)> {
    let pattern: Pattern = pattern
        .parse()
        .with_context(|| format!("Invalid pattern {pattern:?}"))?;

    let revealed: LetterSet = pattern.slots().iter().flatten().copied().collect();
    let mut evidence: Vec<Evidence> = revealed
        .iter()
        .map(|letter| {
            let positions = pattern
                .slots()
                .iter()
                .enumerate()
                .filter(|&(_, slot)| *slot == Some(letter))
                .map(|(i, _)| i);
            Evidence::hit(letter, positions)
        })
        .collect();

    evidence.extend(
        misses
            .bytes()
            .filter(|b| !b.is_ascii_whitespace() && *b != b',')
            .map(Evidence::miss),
    );
    Ok((pattern, evidence))
}

/// Analyze a position given as a pattern such as `_a_` plus missed letters
///
/// Evidence stops being applied once the game is over, so a position that
/// already spent its budget or ruled out every word is reported as such.
///
/// # Errors
///
/// Returns an error if the pattern does not parse, its length or the budget
/// is out of range, or a missed letter is invalid or repeats a known one.
pub fn analyze_pattern<S: Strategy>(
    pattern: &str,
    misses: &str,
    strategy: S,
    words: &[Word],
    config: GameConfig,
) -> Result<AnalysisResult> {
    let (pattern, evidence) = evidence_for(pattern, misses)?;
    let config = GameConfig::new(pattern.len())?
        .with_max_wrong_guesses(config.max_wrong_guesses)?
        .with_thinking_limit(config.thinking_limit);

    let mut solver = Solver::new(strategy, words, config);
    for item in evidence {
        if solver.state().is_terminal() {
            break;
        }
        let description = item.to_string();
        solver
            .apply(item)
            .with_context(|| format!("Cannot apply {description}"))?;
    }

    Ok(AnalysisResult {
        pattern: solver.pattern().clone(),
        state: solver.state(),
        proposal: solver.next_guess(),
        total_candidates: solver.candidates().len(),
        candidates: solver
            .thinking()
            .iter()
            .map(|w| w.text().to_string())
            .collect(),
        scores: solver.scores().ranked(),
        wrong_guesses: solver.wrong_guesses(),
        max_wrong_guesses: config.max_wrong_guesses,
    })
}
