//! Benchmark command
//!
//! Self-plays many words of one length and aggregates how the games ended.

use super::solve::{SolveConfig, SolveResult, solve_word};
use crate::core::Word;
use crate::solver::{GameState, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub word_length: usize,
    pub total_words: usize,
    pub revealed: usize,
    pub exhausted: usize,
    pub no_match: usize,
    pub average_wrong_guesses: f64,
    /// Wrong guesses per game, for the games that revealed the word
    pub distribution: FxHashMap<usize, usize>,
    pub max_wrong_guesses: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the words to play: all words of `length`, or `count` of them at random
///
/// A `seed` makes the sample reproducible. The chosen words keep list order.
#[must_use]
pub fn select_targets(
    words: &[Word],
    length: usize,
    count: Option<usize>,
    seed: Option<u64>,
) -> Vec<Word> {
    let pool: Vec<&Word> = words.iter().filter(|w| w.len() == length).collect();

    let Some(count) = count.filter(|&n| n < pool.len()) else {
        return pool.into_iter().cloned().collect();
    };

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut chosen: Vec<&Word> = pool.choose_multiple(&mut rng, count).copied().collect();
    chosen.sort_by_key(|w| w.rank());
    chosen.into_iter().cloned().collect()
}

/// Run benchmark on a set of target words
///
/// Games run in parallel; they share only the word list.
///
/// # Errors
///
/// Returns an error if a target cannot be played, for instance because the
/// budget is zero or a target is longer than the supported maximum.
pub fn run_benchmark<S>(
    strategy: S,
    words: &[Word],
    targets: &[Word],
    max_wrong_guesses: usize,
    show_progress: bool,
) -> Result<BenchmarkResult>
where
    S: Strategy + Clone + Sync,
{
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<SolveResult> = targets
        .par_iter()
        .map(|target| {
            let config = SolveConfig {
                target: target.text().to_string(),
                max_wrong_guesses,
            };
            let result = solve_word(&config, strategy.clone(), words);
            pb.inc(1);
            result
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    Ok(summarize(
        &results,
        targets.first().map_or(0, Word::len),
        max_wrong_guesses,
        duration,
    ))
}

fn summarize(
    results: &[SolveResult],
    word_length: usize,
    max_wrong_guesses: usize,
    duration: Duration,
) -> BenchmarkResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let (mut revealed, mut exhausted, mut no_match) = (0, 0, 0);
    let mut total_wrong = 0;

    for result in results {
        total_wrong += result.wrong_guesses;
        match result.outcome {
            GameState::WordRevealed => {
                revealed += 1;
                *distribution.entry(result.wrong_guesses).or_insert(0) += 1;
            }
            GameState::BudgetExhausted => exhausted += 1,
            GameState::NoMatch => no_match += 1,
            GameState::InProgress => {}
        }
    }

    let total_words = results.len();
    let average_wrong_guesses = if total_words == 0 {
        0.0
    } else {
        total_wrong as f64 / total_words as f64
    };
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        word_length,
        total_words,
        revealed,
        exhausted,
        no_match,
        average_wrong_guesses,
        distribution,
        max_wrong_guesses,
        duration,
        words_per_second: if secs > 0.0 { total_words as f64 / secs } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{RandomStrategy, WeightedStrategy};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> Vec<Word> {
        words_from_slice(&WORDS[..500])
    }

    #[test]
    fn select_all_when_count_omitted() {
        let words = words();
        let targets = select_targets(&words, 4, None, None);
        let expected = words.iter().filter(|w| w.len() == 4).count();

        assert_eq!(targets.len(), expected);
        assert!(targets.iter().all(|w| w.len() == 4));
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let words = words();
        let a = select_targets(&words, 5, Some(10), Some(42));
        let b = select_targets(&words, 5, Some(10), Some(42));

        assert_eq!(a.len(), 10);
        assert_eq!(a, b);
        assert!(a.windows(2).all(|pair| pair[0].rank() < pair[1].rank()));
    }

    #[test]
    fn count_larger_than_pool_takes_everything() {
        let words = words_from_slice(&["cat", "car", "dog"]);
        assert_eq!(select_targets(&words, 3, Some(50), Some(1)).len(), 3);
    }

    #[test]
    fn benchmark_runs() {
        let words = words();
        let targets = select_targets(&words, 5, Some(20), Some(7));
        let result = run_benchmark(WeightedStrategy, &words, &targets, 6, false).unwrap();

        assert_eq!(result.total_words, 20);
        assert_eq!(result.word_length, 5);
        // Every target is in the list, so no game can run out of candidates
        assert_eq!(result.no_match, 0);
        assert_eq!(result.revealed + result.exhausted, 20);
        assert!(result.average_wrong_guesses <= 6.0);
    }

    #[test]
    fn benchmark_distribution_sums_to_revealed() {
        let words = words();
        let targets = select_targets(&words, 4, Some(30), Some(3));
        let result = run_benchmark(RandomStrategy, &words, &targets, 6, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.revealed);
        for &wrong in result.distribution.keys() {
            assert!(wrong < 6);
        }
    }

    #[test]
    fn benchmark_empty_target_list() {
        let words = words();
        let result = run_benchmark(WeightedStrategy, &words, &[], 6, false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.revealed, 0);
        assert!(result.average_wrong_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn zero_budget_is_an_error() {
        let words = words();
        let targets = select_targets(&words, 3, Some(2), Some(1));
        assert!(run_benchmark(WeightedStrategy, &words, &targets, 0, false).is_err());
    }
}
