//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::candidates::CandidateStore;
use super::scorer::{uniform_scores, weighted_scores};
use crate::core::{LetterSet, Pattern};

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Select the next letter given the surviving candidates, the revealed
    /// pattern and the letters already guessed
    ///
    /// Never returns a letter in `guessed`. Returns `None` when no unguessed
    /// letter appears in an unknown slot of any candidate.
    fn select_letter(
        &self,
        candidates: &CandidateStore,
        pattern: &Pattern,
        guessed: LetterSet,
    ) -> Option<u8>;

    /// Short name used on the command line and in reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Commonality-weighted letter frequency (default)
    Weighted(WeightedStrategy),
    /// Plain letter presence, every word counts the same
    Uniform(UniformStrategy),
    /// Random pick among letters that could still appear
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(
        &self,
        candidates: &CandidateStore,
        pattern: &Pattern,
        guessed: LetterSet,
    ) -> Option<u8> {
        match self {
            Self::Weighted(s) => s.select_letter(candidates, pattern, guessed),
            Self::Uniform(s) => s.select_letter(candidates, pattern, guessed),
            Self::Random(s) => s.select_letter(candidates, pattern, guessed),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Weighted(s) => s.name(),
            Self::Uniform(s) => s.name(),
            Self::Random(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "weighted", "uniform", "random".
    /// Defaults to weighted if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "uniform" => Self::Uniform(UniformStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Weighted(WeightedStrategy),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Weighted(WeightedStrategy)
    }
}

/// Picks the letter with the highest `1 / rank` weighted frequency
///
/// Common words pull harder than rare ones, so the guess follows realistic
/// word usage rather than raw dictionary presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedStrategy;

impl Strategy for WeightedStrategy {
    fn select_letter(
        &self,
        candidates: &CandidateStore,
        pattern: &Pattern,
        guessed: LetterSet,
    ) -> Option<u8> {
        weighted_scores(candidates, pattern, guessed).best()
    }

    fn name(&self) -> &'static str {
        "weighted"
    }
}

/// Picks the letter present in the most candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformStrategy;

impl Strategy for UniformStrategy {
    fn select_letter(
        &self,
        candidates: &CandidateStore,
        pattern: &Pattern,
        guessed: LetterSet,
    ) -> Option<u8> {
        uniform_scores(candidates, pattern, guessed).best()
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Random strategy
///
/// Picks uniformly among letters that still occur in an unknown slot of some
/// candidate. Useful as a baseline in benchmarks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(
        &self,
        candidates: &CandidateStore,
        pattern: &Pattern,
        guessed: LetterSet,
    ) -> Option<u8> {
        use rand::prelude::IndexedRandom;

        let eligible: Vec<u8> = uniform_scores(candidates, pattern, guessed)
            .eligible()
            .iter()
            .collect();

        eligible.choose(&mut rand::rng()).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn setup_store() -> CandidateStore {
        CandidateStore::new(words_from_slice(&["cat", "car", "can"]), 3)
    }

    #[test]
    fn weighted_strategy_breaks_ties_alphabetically() {
        let strategy = WeightedStrategy;
        let letter = strategy.select_letter(&setup_store(), &Pattern::new(3), LetterSet::new());
        assert_eq!(letter, Some(b'a'));
    }

    #[test]
    fn weighted_strategy_prefers_common_words() {
        let pattern: Pattern = "ca_".parse().unwrap();
        let guessed: LetterSet = b"ac".iter().copied().collect();

        let letter = WeightedStrategy.select_letter(&setup_store(), &pattern, guessed);
        assert_eq!(letter, Some(b't'));
    }

    #[test]
    fn uniform_strategy_ignores_rank() {
        let pattern: Pattern = "ca_".parse().unwrap();
        let guessed: LetterSet = b"ac".iter().copied().collect();

        // n, r and t all appear once, n comes first
        let letter = UniformStrategy.select_letter(&setup_store(), &pattern, guessed);
        assert_eq!(letter, Some(b'n'));
    }

    #[test]
    fn random_strategy_selects_eligible_letter() {
        let pattern: Pattern = "ca_".parse().unwrap();
        let guessed: LetterSet = b"ac".iter().copied().collect();

        for _ in 0..20 {
            let letter = RandomStrategy
                .select_letter(&setup_store(), &pattern, guessed)
                .unwrap();
            assert!(b"nrt".contains(&letter));
        }
    }

    #[test]
    fn strategies_return_none_on_empty_store() {
        let store = CandidateStore::new(Vec::new(), 3);
        for strategy in [
            StrategyType::from_name("weighted"),
            StrategyType::from_name("uniform"),
            StrategyType::from_name("random"),
        ] {
            assert_eq!(
                strategy.select_letter(&store, &Pattern::new(3), LetterSet::new()),
                None
            );
        }
    }

    #[test]
    fn from_name_defaults_to_weighted() {
        assert_eq!(StrategyType::from_name("nonsense").name(), "weighted");
        assert_eq!(StrategyType::from_name("uniform").name(), "uniform");
        assert_eq!(StrategyType::from_name("random").name(), "random");
    }
}
