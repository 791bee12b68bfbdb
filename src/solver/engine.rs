//! Main hangman solver interface

use super::candidates::CandidateStore;
use super::config::GameConfig;
use super::error::IllegalInput;
use super::scorer::{LetterScores, weighted_scores};
use super::state::GameState;
use super::strategy::Strategy;
use crate::core::{Evidence, LetterSet, Pattern, Word, alphabetic_index};
use log::debug;
use std::collections::BTreeSet;

/// One applied piece of evidence and its effect on the candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub evidence: Evidence,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Main hangman solver
///
/// Owns the state of a single game: the surviving candidates, the revealed
/// pattern, the guessed letters and the hit/miss counters. Each call to
/// [`Solver::apply`] is atomic, either all of it happens or none of it does.
#[derive(Clone)]
pub struct Solver<S: Strategy> {
    strategy: S,
    config: GameConfig,
    candidates: CandidateStore,
    pattern: Pattern,
    guessed: LetterSet,
    correct_guesses: usize,
    wrong_guesses: usize,
    rounds: Vec<Round>,
}

impl<S: Strategy> Solver<S> {
    /// Start a new game over the words of `config.word_length`
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Evidence;
    /// use hangman_solver::solver::{GameConfig, GameState, Solver, WeightedStrategy};
    /// use hangman_solver::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["cat", "car", "can"]);
    /// let mut solver = Solver::new(WeightedStrategy, &words, GameConfig::new(3).unwrap());
    ///
    /// assert_eq!(solver.next_guess(), Some(b'a'));
    /// solver.apply(Evidence::hit(b'a', [1])).unwrap();
    /// solver.apply(Evidence::hit(b'c', [0])).unwrap();
    /// assert_eq!(solver.next_guess(), Some(b't'));
    /// solver.apply(Evidence::hit(b't', [2])).unwrap();
    /// assert_eq!(solver.state(), GameState::WordRevealed);
    /// ```
    #[must_use]
    pub fn new(strategy: S, words: &[Word], config: GameConfig) -> Self {
        let candidates = CandidateStore::new(words.iter().cloned(), config.word_length);

        debug!(
            "new game: length {}, budget {}, {} candidates",
            config.word_length,
            config.max_wrong_guesses,
            candidates.len()
        );

        Self {
            strategy,
            config,
            candidates,
            pattern: Pattern::new(config.word_length),
            guessed: LetterSet::new(),
            correct_guesses: 0,
            wrong_guesses: 0,
            rounds: Vec::new(),
        }
    }

    /// Classify the game as it stands
    #[must_use]
    pub fn state(&self) -> GameState {
        GameState::evaluate(
            self.wrong_guesses,
            self.config.max_wrong_guesses,
            self.correct_guesses,
            self.config.word_length,
            self.candidates.len(),
        )
    }

    /// The letter to guess next, or `None` once the game is over
    #[must_use]
    pub fn next_guess(&self) -> Option<u8> {
        if self.state().is_terminal() {
            return None;
        }
        self.strategy
            .select_letter(&self.candidates, &self.pattern, self.guessed)
    }

    /// Commonality-weighted score of every letter, for display
    #[must_use]
    pub fn scores(&self) -> LetterScores {
        weighted_scores(&self.candidates, &self.pattern, self.guessed)
    }

    /// Check evidence against the game without applying it
    ///
    /// # Errors
    /// Returns `IllegalInput` if the game is over, the letter is not a-z or was
    /// already guessed, or a hit names no positions, a position past the end of
    /// the word, or a position that is already revealed.
    pub fn validate(&self, evidence: &Evidence) -> Result<(), IllegalInput> {
        let state = self.state();
        if state.is_terminal() {
            return Err(IllegalInput::GameOver(state));
        }

        let letter = evidence.letter();
        if alphabetic_index(letter).is_none() {
            return Err(IllegalInput::InvalidLetter(letter as char));
        }
        if self.guessed.contains(letter) {
            return Err(IllegalInput::AlreadyGuessed(letter as char));
        }

        if let Evidence::Hit { positions, .. } = evidence {
            if positions.is_empty() {
                return Err(IllegalInput::NoPositions);
            }
            for &position in positions {
                if position >= self.pattern.len() {
                    return Err(IllegalInput::PositionOutOfRange {
                        position,
                        length: self.pattern.len(),
                    });
                }
                if let Some(revealed) = self.pattern.get(position) {
                    return Err(IllegalInput::PositionRevealed {
                        position,
                        letter: revealed as char,
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply the word holder's answer for one guessed letter
    ///
    /// Returns the state of the game after the evidence was applied.
    ///
    /// # Errors
    /// Returns `IllegalInput` when [`Solver::validate`] rejects the evidence;
    /// nothing is changed in that case.
    pub fn apply(&mut self, evidence: Evidence) -> Result<GameState, IllegalInput> {
        self.validate(&evidence)?;

        let before = self.candidates.len();
        match &evidence {
            Evidence::Hit { letter, positions } => self.filter_hit(*letter, positions),
            Evidence::Miss { letter } => self.filter_miss(*letter),
        }
        self.guessed.insert(evidence.letter());

        let after = self.candidates.len();
        debug!("{evidence}: {before} -> {after} candidates");

        self.rounds.push(Round {
            evidence,
            candidates_before: before,
            candidates_after: after,
        });

        Ok(self.state())
    }

    /// Shorthand for applying [`Evidence::Hit`]
    ///
    /// # Errors
    /// See [`Solver::apply`].
    pub fn apply_hit(
        &mut self,
        letter: u8,
        positions: impl IntoIterator<Item = usize>,
    ) -> Result<GameState, IllegalInput> {
        self.apply(Evidence::hit(letter, positions))
    }

    /// Shorthand for applying [`Evidence::Miss`]
    ///
    /// # Errors
    /// See [`Solver::apply`].
    pub fn apply_miss(&mut self, letter: u8) -> Result<GameState, IllegalInput> {
        self.apply(Evidence::miss(letter))
    }

    /// Keep words holding `letter` at exactly `positions` and nowhere else
    fn filter_hit(&mut self, letter: u8, positions: &BTreeSet<usize>) {
        self.candidates.remove_where(|word| {
            word.chars()
                .iter()
                .enumerate()
                .any(|(i, &ch)| positions.contains(&i) != (ch == letter))
        });

        for &position in positions {
            self.pattern.confirm(position, letter);
        }
        self.correct_guesses += positions.len();
    }

    /// Drop every word containing `letter`
    fn filter_miss(&mut self, letter: u8) {
        self.candidates.remove_where(|word| word.has_letter(letter));
        self.wrong_guesses += 1;
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateStore {
        &self.candidates
    }

    /// The candidates to show while thinking, bounded by the configured limit
    #[must_use]
    pub fn thinking(&self) -> &[Word] {
        self.candidates.snapshot(self.config.thinking_limit)
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Number of revealed slots
    #[must_use]
    pub const fn correct_guesses(&self) -> usize {
        self.correct_guesses
    }

    /// Number of misses so far
    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::WeightedStrategy;
    use crate::wordlists::loader::words_from_slice;

    fn solver(words: &[&str], length: usize) -> Solver<WeightedStrategy> {
        let words = words_from_slice(words);
        Solver::new(WeightedStrategy, &words, GameConfig::new(length).unwrap())
    }

    fn texts(solver: &Solver<WeightedStrategy>) -> Vec<&str> {
        solver.candidates().iter().map(Word::text).collect()
    }

    #[test]
    fn new_game_starts_in_progress() {
        let solver = solver(&["cat", "car", "can", "horse"], 3);
        assert_eq!(solver.state(), GameState::InProgress);
        assert_eq!(solver.candidates().len(), 3);
        assert_eq!(solver.pattern().to_string(), "___");
        assert!(solver.guessed().is_empty());
    }

    #[test]
    fn cat_car_can_scenario() {
        let mut solver = solver(&["cat", "car", "can"], 3);

        assert_eq!(solver.next_guess(), Some(b'a'));
        solver.apply_hit(b'a', [1]).unwrap();
        assert_eq!(solver.candidates().len(), 3);

        assert_eq!(solver.next_guess(), Some(b'c'));
        solver.apply_hit(b'c', [0]).unwrap();

        let scores = solver.scores();
        assert!((scores.get(b't') - 1.0).abs() < 1e-9);
        assert!((scores.get(b'r') - 0.5).abs() < 1e-9);
        assert!((scores.get(b'n') - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(solver.next_guess(), Some(b't'));
    }

    #[test]
    fn hit_keeps_exact_positions_only() {
        let mut solver = solver(&["noon", "nine", "tent", "none", "moon"], 4);

        solver.apply_hit(b'n', [0, 3]).unwrap();
        assert_eq!(texts(&solver), vec!["noon"]);
        for word in solver.candidates() {
            let at: Vec<usize> = word.positions_of(b'n').collect();
            assert_eq!(at, vec![0, 3]);
        }
        assert_eq!(solver.correct_guesses(), 2);
        assert_eq!(solver.pattern().to_string(), "n__n");
    }

    #[test]
    fn hit_rejects_words_with_extra_occurrences() {
        let mut solver = solver(&["nine", "none", "nana"], 4);
        solver.apply_hit(b'n', [0]).unwrap();
        // every word has a second n
        assert!(solver.candidates().is_empty());
        assert_eq!(solver.state(), GameState::NoMatch);
    }

    #[test]
    fn miss_removes_words_containing_letter() {
        let mut solver = solver(&["cat", "dog", "cow", "pig"], 3);
        solver.apply_miss(b'o').unwrap();

        assert_eq!(texts(&solver), vec!["cat", "pig"]);
        assert!(solver.candidates().iter().all(|w| !w.has_letter(b'o')));
        assert_eq!(solver.wrong_guesses(), 1);
        assert!(solver.guessed().contains(b'o'));
    }

    #[test]
    fn miss_on_absent_letter_only_counts() {
        let mut solver = solver(&["cat", "car", "can"], 3);
        solver.apply_miss(b'z').unwrap();

        assert_eq!(solver.candidates().len(), 3);
        assert_eq!(solver.wrong_guesses(), 1);
    }

    #[test]
    fn out_of_range_hit_is_rejected_without_changes() {
        let mut solver = solver(&["cat", "car", "can"], 3);
        let err = solver.apply_hit(b't', [5]).unwrap_err();

        assert_eq!(
            err,
            IllegalInput::PositionOutOfRange {
                position: 5,
                length: 3
            }
        );
        assert_eq!(solver.candidates().len(), 3);
        assert_eq!(solver.correct_guesses(), 0);
        assert_eq!(solver.wrong_guesses(), 0);
        assert!(solver.guessed().is_empty());
        assert!(solver.rounds().is_empty());
    }

    #[test]
    fn partially_valid_hit_is_rejected_atomically() {
        let mut solver = solver(&["cat", "car", "can"], 3);
        assert!(solver.apply_hit(b'a', [1, 3]).is_err());
        assert_eq!(solver.pattern().to_string(), "___");
        assert_eq!(solver.candidates().len(), 3);
    }

    #[test]
    fn revealed_position_is_rejected() {
        let mut solver = solver(&["cat", "car", "can"], 3);
        solver.apply_hit(b'a', [1]).unwrap();

        let err = solver.apply_hit(b't', [1]).unwrap_err();
        assert_eq!(
            err,
            IllegalInput::PositionRevealed {
                position: 1,
                letter: 'a'
            }
        );
    }

    #[test]
    fn repeated_letter_is_rejected() {
        let mut solver = solver(&["cat", "car", "can"], 3);
        solver.apply_miss(b'e').unwrap();
        assert_eq!(
            solver.apply_miss(b'e'),
            Err(IllegalInput::AlreadyGuessed('e'))
        );
        assert_eq!(
            solver.apply_hit(b'E', [0]),
            Err(IllegalInput::AlreadyGuessed('e'))
        );
        assert_eq!(solver.wrong_guesses(), 1);
    }

    #[test]
    fn empty_hit_and_bad_letter_are_rejected() {
        let mut solver = solver(&["cat"], 3);
        assert_eq!(
            solver.apply_hit(b'c', std::iter::empty()),
            Err(IllegalInput::NoPositions)
        );
        assert_eq!(solver.apply_miss(b'1'), Err(IllegalInput::InvalidLetter('1')));
    }

    #[test]
    fn budget_exhaustion_ends_the_game() {
        let words = words_from_slice(&["cat", "car", "can"]);
        let config = GameConfig::new(3)
            .unwrap()
            .with_max_wrong_guesses(2)
            .unwrap();
        let mut solver = Solver::new(WeightedStrategy, &words, config);

        assert_eq!(solver.apply_miss(b'x'), Ok(GameState::InProgress));
        assert_eq!(solver.apply_miss(b'y'), Ok(GameState::BudgetExhausted));
        assert_eq!(solver.next_guess(), None);

        let err = solver.apply_hit(b'a', [1]).unwrap_err();
        assert_eq!(err, IllegalInput::GameOver(GameState::BudgetExhausted));
        assert_eq!(solver.candidates().len(), 3);
        assert_eq!(solver.wrong_guesses(), 2);
    }

    #[test]
    fn no_match_is_terminal() {
        let mut solver = solver(&["cat", "car"], 3);
        assert_eq!(solver.apply_miss(b'a'), Ok(GameState::NoMatch));
        assert_eq!(solver.next_guess(), None);
        assert_eq!(
            solver.apply_miss(b'b'),
            Err(IllegalInput::GameOver(GameState::NoMatch))
        );
        assert_eq!(solver.wrong_guesses(), 1);
    }

    #[test]
    fn narrowing_to_one_word_then_revealing_it() {
        let mut solver = solver(&["cat", "car", "can", "cot"], 3);

        solver.apply_hit(b'a', [1]).unwrap();
        solver.apply_miss(b'r').unwrap();
        solver.apply_miss(b'n').unwrap();
        assert_eq!(texts(&solver), vec!["cat"]);

        solver.apply_hit(b'c', [0]).unwrap();
        assert_eq!(solver.apply_hit(b't', [2]), Ok(GameState::WordRevealed));
        assert_eq!(solver.correct_guesses(), 3);
        assert!(solver.pattern().is_complete());
        assert_eq!(solver.next_guess(), None);
    }

    #[test]
    fn candidate_count_never_grows() {
        let mut solver = solver(&["cat", "car", "can", "cot", "cut", "bat"], 3);
        let mut last = solver.candidates().len();

        while let Some(letter) = solver.next_guess() {
            let evidence = Evidence::from_answer("cut", letter);
            solver.apply(evidence).unwrap();
            assert!(solver.candidates().len() <= last);
            last = solver.candidates().len();
            assert!(!solver.guessed().is_empty());
        }

        assert_eq!(solver.state(), GameState::WordRevealed);
        assert!(solver.correct_guesses() <= 3);
        assert!(solver.wrong_guesses() <= solver.config().max_wrong_guesses);
    }

    #[test]
    fn proposals_are_never_repeated() {
        let mut solver = solver(&["apple", "angle", "ample", "amble", "addle"], 5);
        let mut proposed = LetterSet::new();

        while let Some(letter) = solver.next_guess() {
            assert!(proposed.insert(letter), "letter proposed twice");
            solver.apply(Evidence::from_answer("addle", letter)).unwrap();
        }
    }

    #[test]
    fn rounds_record_candidate_counts() {
        let mut solver = solver(&["cat", "dog", "cow"], 3);
        solver.apply_miss(b'o').unwrap();

        let round = &solver.rounds()[0];
        assert_eq!(round.evidence, Evidence::miss(b'o'));
        assert_eq!(round.candidates_before, 3);
        assert_eq!(round.candidates_after, 1);
    }

    #[test]
    fn thinking_respects_limit() {
        let words = words_from_slice(&["cat", "car", "can", "cot", "cut"]);
        let config = GameConfig::new(3).unwrap().with_thinking_limit(Some(2));
        let solver = Solver::new(WeightedStrategy, &words, config);
        assert_eq!(solver.thinking().len(), 2);

        let solver = Solver::new(WeightedStrategy, &words, config.with_thinking_limit(None));
        assert_eq!(solver.thinking().len(), 5);
    }
}
