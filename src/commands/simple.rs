//! Simple interactive CLI mode
//!
//! Line-based console game without the TUI: the screen is cleared and
//! redrawn every round.

use crate::core::{Evidence, Word};
use crate::interactive::{parse_positions, parse_word_length};
use crate::output::formatters::{hangman_frame, render_pattern, thinking_line};
use crate::output::format_outcome;
use crate::solver::{GameConfig, Solver, Strategy};
use anyhow::{Context, Result};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

/// Settings for the console game
#[derive(Debug, Clone, Copy)]
pub struct SimpleConfig {
    /// Word length to play every game with, asked for each game when `None`
    pub length: Option<usize>,
    pub max_wrong_guesses: usize,
    pub thinking_limit: Option<usize>,
    /// Clear the terminal before each round
    pub clear_screen: bool,
}

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing to
/// the terminal, or if the configured length or budget is out of range.
pub fn run_simple<S: Strategy + Clone>(
    strategy: S,
    words: &[Word],
    config: SimpleConfig,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(&mut stdin.lock(), &mut stdout, strategy, words, config)
}

/// Play games until the player stops or input runs out
///
/// # Errors
///
/// See [`run_simple`].
pub fn play<R, W, S>(
    input: &mut R,
    out: &mut W,
    strategy: S,
    words: &[Word],
    config: SimpleConfig,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: Strategy + Clone,
{
    writeln!(out, "\n{}", "HANGMAN SOLVER".bright_cyan().bold())?;
    writeln!(out, "Think of a word. I'll guess it one letter at a time.")?;
    writeln!(out, "Type 'quit' at any prompt to stop.\n")?;

    loop {
        let length = match config.length {
            Some(length) => length,
            None => match ask_length(input, out)? {
                Some(length) => length,
                None => return Ok(()),
            },
        };

        let game = GameConfig::new(length)?
            .with_max_wrong_guesses(config.max_wrong_guesses)?
            .with_thinking_limit(config.thinking_limit);
        let mut solver = Solver::new(strategy.clone(), words, game);

        if !play_game(input, out, &mut solver, config.clear_screen)? {
            return Ok(());
        }

        match prompt(input, out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => {
                writeln!(out, "\nThanks for playing!")?;
                return Ok(());
            }
        }
    }
}

/// Play one game to its end; returns `false` if the player quit
fn play_game<R, W, S>(
    input: &mut R,
    out: &mut W,
    solver: &mut Solver<S>,
    clear_screen: bool,
) -> Result<bool>
where
    R: BufRead,
    W: Write,
    S: Strategy,
{
    loop {
        draw(out, solver, clear_screen)?;

        let state = solver.state();
        if state.is_terminal() {
            let remaining: Vec<String> = solver
                .candidates()
                .iter()
                .map(|w| w.text().to_string())
                .collect();
            if let Some(outcome) = format_outcome(state, &remaining) {
                writeln!(out, "{outcome}")?;
            }
            return Ok(true);
        }

        let total = solver.candidates().len();
        writeln!(
            out,
            "Thinking of: {}",
            thinking_line(solver.thinking().iter().map(Word::text), total)
        )?;

        let Some(letter) = solver.next_guess() else {
            return Ok(true);
        };
        let shown = char::from(letter).to_ascii_uppercase();

        loop {
            let question = format!(
                "Is {} in your word? Enter its positions (e.g. 1 3), or nothing if not",
                shown.to_string().bright_yellow().bold()
            );
            let Some(line) = prompt(input, out, &question)? else {
                return Ok(false);
            };

            let positions = match parse_positions(&line, solver.config().word_length) {
                Ok(positions) => positions,
                Err(e) => {
                    writeln!(out, "{}", e.to_string().red())?;
                    continue;
                }
            };

            let evidence = if positions.is_empty() {
                Evidence::miss(letter)
            } else {
                Evidence::hit(letter, positions)
            };

            match solver.apply(evidence) {
                Ok(_) => break,
                Err(e) => writeln!(out, "{}", e.to_string().red())?,
            }
        }
    }
}

fn draw<W: Write, S: Strategy>(out: &mut W, solver: &Solver<S>, clear_screen: bool) -> Result<()> {
    if clear_screen {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    let config = solver.config();
    writeln!(out, "{}", hangman_frame(solver.wrong_guesses(), config.max_wrong_guesses))?;
    writeln!(out)?;
    writeln!(out, "{}", render_pattern(solver.pattern()).bold())?;
    writeln!(out)?;
    writeln!(
        out,
        "Misses: {}/{}   Guessed: {}",
        solver.wrong_guesses(),
        config.max_wrong_guesses,
        solver.guessed().to_string().to_uppercase()
    )?;
    Ok(())
}

/// Ask for a word length until a valid one is given; `None` if the player quit
fn ask_length<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<usize>> {
    loop {
        let Some(line) = prompt(input, out, "How many letters are in your word?")? else {
            return Ok(None);
        };
        match parse_word_length(&line) {
            Ok(length) => return Ok(Some(length)),
            Err(e) => writeln!(out, "{}", e.to_string().red())?,
        }
    }
}

/// Get user input with a prompt; `None` on end of input or a quit command
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    let line = line.trim();

    if read == 0 || matches!(line, "quit" | "q" | "exit") {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}
