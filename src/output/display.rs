//! Display functions for command results

use super::formatters::{
    create_progress_bar, hangman_frame, outcome_message, render_pattern, thinking_line,
};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::GameState;
use colored::Colorize;

/// A finished game's outcome in the player's words, `None` while in progress
///
/// When the player wins, every word still possible is listed.
#[must_use]
pub fn format_outcome(state: GameState, remaining: &[String]) -> Option<String> {
    let message = outcome_message(state)?;

    let text = match state {
        GameState::BudgetExhausted => format!(
            "{}\nI was thinking of: {}",
            message.green().bold(),
            remaining.join(", ")
        ),
        GameState::WordRevealed => message.bright_yellow().bold().to_string(),
        _ => message.red().bold().to_string(),
    };
    Some(text)
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        let detail = round.evidence.to_string();
        let detail = if round.evidence.is_hit() {
            detail.green()
        } else {
            detail.red()
        };

        println!("\nRound {}: {}", i + 1, detail.bold());
        if verbose {
            println!(
                "  Candidates: {} → {}",
                round.candidates_before, round.candidates_after
            );
        }
    }

    println!();
    println!("{}", hangman_frame(result.wrong_guesses, result.max_wrong_guesses));
    println!(
        "Wrong guesses: {}/{}",
        result.wrong_guesses, result.max_wrong_guesses
    );
    if let Some(outcome) = format_outcome(result.outcome, &result.remaining) {
        println!("{outcome}");
    }
}

/// Print the result of a position analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "POSITION ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", render_pattern(&result.pattern).bright_white().bold());
    println!(
        "\nWrong guesses: {}/{}   State: {}",
        result.wrong_guesses, result.max_wrong_guesses, result.state
    );

    println!(
        "\n📊 {} candidates: {}",
        result.total_candidates,
        thinking_line(
            result.candidates.iter().map(String::as_str),
            result.total_candidates
        )
    );

    if let Some(letter) = result.proposal {
        println!(
            "\nNext guess: {}",
            char::from(letter)
                .to_ascii_uppercase()
                .to_string()
                .bright_yellow()
                .bold()
        );
    }

    let Some(&(_, top)) = result.scores.first() else {
        return;
    };

    println!("\n📈 {}", "Letter scores:".bright_cyan().bold());
    for &(letter, score) in &result.scores {
        let bar = create_progress_bar(score, top, 30);
        println!(
            "   {}: [{}] {:.3}",
            char::from(letter).to_ascii_uppercase(),
            bar.green(),
            score
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let pct = |count: usize| {
        if result.total_words == 0 {
            0.0
        } else {
            count as f64 / result.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Word length:      {}", result.word_length);
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Revealed:         {}",
        format!("{} ({:.1}%)", result.revealed, pct(result.revealed)).green()
    );
    println!(
        "   Budget exhausted: {}",
        format!("{} ({:.1}%)", result.exhausted, pct(result.exhausted)).yellow()
    );
    if result.no_match > 0 {
        println!(
            "   No match:         {}",
            format!("{}", result.no_match).red()
        );
    }
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_wrong_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Misses before reveal:".bright_cyan().bold());
    for wrong in 0..result.max_wrong_guesses {
        if let Some(&count) = result.distribution.get(&wrong) {
            let share = pct(count);
            let bar_width = ((share / 2.5) as usize).min(40);
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40 - bar_width).bright_black()
            );
            println!("   {wrong}: {bar} {count:4} ({share:5.1}%)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_win_lists_remaining_words() {
        colored::control::set_override(false);
        let remaining = vec!["cat".to_string(), "car".to_string()];
        let text = format_outcome(GameState::BudgetExhausted, &remaining).unwrap();

        assert_eq!(text, "You win!\nI was thinking of: cat, car");
        assert!(format_outcome(GameState::InProgress, &remaining).is_none());
    }
}
