//! Letter scoring over the candidate store
//!
//! Every unknown slot of every candidate votes for the letter it holds. A
//! letter is counted at most once per word, so `"banana"` supports `a` exactly
//! as much as `"bandit"` does.

use super::candidates::CandidateStore;
use crate::core::{ALPHABET_LEN, LetterSet, Pattern, Word, alphabetic_index, letter_at};

/// Accumulated score for each letter, indexed by alphabetic index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterScores([f64; ALPHABET_LEN]);

impl LetterScores {
    /// Score of a single letter, zero for non-letters
    #[must_use]
    pub fn get(&self, letter: u8) -> f64 {
        alphabetic_index(letter).map_or(0.0, |index| self.0[index])
    }

    /// Letter with the strictly highest positive score
    ///
    /// Ties go to the letter that comes first in the alphabet. Returns `None`
    /// when no letter scored above zero.
    #[must_use]
    pub fn best(&self) -> Option<u8> {
        let mut best: Option<(usize, f64)> = None;
        for (index, &score) in self.0.iter().enumerate() {
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| letter_at(index))
    }

    /// Letters with a positive score, best first
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, f64)> {
        let mut ranked: Vec<(u8, f64)> = self
            .0
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score > 0.0)
            .map(|(index, &score)| (letter_at(index), score))
            .collect();
        // Stable sort keeps alphabetic order among equal scores
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Letters with a positive score, in alphabetic order
    #[must_use]
    pub fn eligible(&self) -> LetterSet {
        (0..ALPHABET_LEN)
            .filter(|&index| self.0[index] > 0.0)
            .map(letter_at)
            .collect()
    }
}

/// Score letters across the unknown slots of every candidate
///
/// Each word contributes `weight(word)` to every distinct unguessed letter it
/// holds in an unknown slot.
pub fn score_letters<W>(
    candidates: &CandidateStore,
    pattern: &Pattern,
    guessed: LetterSet,
    weight: W,
) -> LetterScores
where
    W: Fn(&Word) -> f64,
{
    let unknown: Vec<usize> = pattern.unknown_positions().collect();
    let mut scores = [0.0; ALPHABET_LEN];

    for word in candidates {
        let mut seen = LetterSet::new();
        let word_weight = weight(word);

        for &position in &unknown {
            let letter = word.char_at(position);
            if guessed.contains(letter) || !seen.insert(letter) {
                continue;
            }
            if let Some(index) = alphabetic_index(letter) {
                scores[index] += word_weight;
            }
        }
    }

    LetterScores(scores)
}

/// Commonality-weighted scores: each word weighs `1 / rank`
#[must_use]
pub fn weighted_scores(
    candidates: &CandidateStore,
    pattern: &Pattern,
    guessed: LetterSet,
) -> LetterScores {
    score_letters(candidates, pattern, guessed, Word::weight)
}

/// Presence counts: each word weighs 1 regardless of rank
#[must_use]
pub fn uniform_scores(
    candidates: &CandidateStore,
    pattern: &Pattern,
    guessed: LetterSet,
) -> LetterScores {
    score_letters(candidates, pattern, guessed, |_| 1.0)
}
