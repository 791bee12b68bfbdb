//! Formatting utilities for terminal output

use crate::core::Pattern;
use crate::solver::GameState;

/// ASCII gallows, from empty to fully hanged
pub const HANGMAN_FRAMES: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Which gallows frame to draw after `wrong` misses out of `max_wrong`
///
/// With the default budget of 6 each miss adds one body part. Other budgets
/// are scaled so the last frame only shows once the budget is spent.
#[must_use]
pub fn frame_index(wrong: usize, max_wrong: usize) -> usize {
    let last = HANGMAN_FRAMES.len() - 1;
    if max_wrong == 0 || wrong >= max_wrong {
        return last;
    }
    wrong * last / max_wrong
}

#[must_use]
pub fn hangman_frame(wrong: usize, max_wrong: usize) -> &'static str {
    HANGMAN_FRAMES[frame_index(wrong, max_wrong)]
}

/// Render a pattern as two lines: the slots, then their 1-based indices
///
/// # Examples
/// ```
/// use hangman_solver::core::Pattern;
/// use hangman_solver::output::formatters::render_pattern;
///
/// let pattern: Pattern = "_a_".parse().unwrap();
/// assert_eq!(render_pattern(&pattern), "_ a _\n1 2 3");
/// ```
#[must_use]
pub fn render_pattern(pattern: &Pattern) -> String {
    let width = pattern.len().to_string().len();

    let slots: Vec<String> = pattern
        .slots()
        .iter()
        .map(|slot| {
            let ch = slot.map_or('_', char::from);
            format!("{ch:>width$}")
        })
        .collect();
    let labels: Vec<String> = (1..=pattern.len())
        .map(|index| format!("{index:>width$}"))
        .collect();

    format!("{}\n{}", slots.join(" "), labels.join(" "))
}

/// Comma-separated candidate list, ending in `...` when fewer than `total` are shown
#[must_use]
pub fn thinking_line<'a>(shown: impl IntoIterator<Item = &'a str>, total: usize) -> String {
    let shown: Vec<&str> = shown.into_iter().collect();
    let mut line = shown.join(", ");

    if shown.len() < total {
        if !line.is_empty() {
            line.push_str(", ");
        }
        line.push_str("...");
    }
    line
}

/// How a finished game reads to the person holding the word
#[must_use]
pub const fn outcome_message(state: GameState) -> Option<&'static str> {
    match state {
        GameState::InProgress => None,
        GameState::BudgetExhausted => Some("You win!"),
        GameState::WordRevealed => Some("I win!"),
        GameState::NoMatch => Some("Looks like my word list does not have that word"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
