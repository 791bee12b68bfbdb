//! TUI application state and logic

use super::input::{parse_positions, parse_word_length};
use crate::core::{Evidence, Word};
use crate::output::formatters::outcome_message;
use crate::solver::{GameConfig, GameState, Solver, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub strategy: StrategyType,
    pub max_wrong_guesses: usize,
    pub thinking_limit: Option<usize>,
    /// The running game, `None` while the word length is being entered
    pub solver: Option<Solver<StrategyType>>,
    pub proposal: Option<u8>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Game before each applied round, most recent last
    pub undo_stack: Vec<Solver<StrategyType>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    WordLength,
    Positions,
    GameOver(GameState),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Running tally of finished games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub solver_wins: usize,
    pub player_wins: usize,
    pub no_match: usize,
}

impl Statistics {
    pub fn record(&mut self, state: GameState) {
        let Some(slot) = self.slot(state) else {
            return;
        };
        *slot += 1;
        self.total_games += 1;
    }

    /// Take back a finished game, used when its last round is undone
    pub fn forget(&mut self, state: GameState) {
        let Some(slot) = self.slot(state) else {
            return;
        };
        *slot = slot.saturating_sub(1);
        self.total_games = self.total_games.saturating_sub(1);
    }

    fn slot(&mut self, state: GameState) -> Option<&mut usize> {
        match state {
            GameState::InProgress => None,
            GameState::WordRevealed => Some(&mut self.solver_wins),
            GameState::BudgetExhausted => Some(&mut self.player_wins),
            GameState::NoMatch => Some(&mut self.no_match),
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        words: &'a [Word],
        strategy: StrategyType,
        max_wrong_guesses: usize,
        thinking_limit: Option<usize>,
    ) -> Self {
        Self {
            words,
            strategy,
            max_wrong_guesses,
            thinking_limit,
            solver: None,
            proposal: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Think of a word. I'll guess it one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "How many letters does it have?".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::WordLength,
            undo_stack: Vec::new(),
        }
    }

    /// Start a game from the length typed into the input buffer
    pub fn submit_length(&mut self) {
        let length = match parse_word_length(&self.input_buffer) {
            Ok(length) => length,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_buffer.clear();
                return;
            }
        };
        self.input_buffer.clear();

        let config = GameConfig::new(length)
            .and_then(|c| c.with_max_wrong_guesses(self.max_wrong_guesses))
            .map(|c| c.with_thinking_limit(self.thinking_limit));

        match config {
            Ok(config) => {
                let solver = Solver::new(self.strategy, self.words, config);
                let count = solver.candidates().len();
                self.solver = Some(solver);
                self.undo_stack.clear();
                self.input_mode = InputMode::Positions;
                self.add_message(
                    &format!("I know {count} words of {length} letters"),
                    MessageStyle::Info,
                );
                self.after_round();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Apply the positions typed for the proposed letter
    ///
    /// Illegal input leaves the game untouched and is reported as a message.
    pub fn submit_positions(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let (Some(solver), Some(letter)) = (self.solver.as_mut(), self.proposal) else {
            return;
        };

        let positions = match parse_positions(&input, solver.config().word_length) {
            Ok(positions) => positions,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let evidence = if positions.is_empty() {
            Evidence::miss(letter)
        } else {
            Evidence::hit(letter, positions)
        };
        let description = evidence.to_string();

        let before = solver.clone();
        match solver.apply(evidence) {
            Ok(_) => {
                self.undo_stack.push(before);
                self.add_message(&description, MessageStyle::Info);
                self.after_round();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Propose the next letter, or finish the game if it is over
    fn after_round(&mut self) {
        let Some(solver) = &self.solver else {
            return;
        };

        let state = solver.state();
        self.proposal = solver.next_guess();

        if let Some(message) = outcome_message(state) {
            self.stats.record(state);
            self.input_mode = InputMode::GameOver(state);
            let style = match state {
                GameState::NoMatch => MessageStyle::Error,
                _ => MessageStyle::Success,
            };
            self.add_message(message, style);
            self.add_message("Press 'n' for new game, 'u' to undo or 'q' to quit.", MessageStyle::Info);
        } else {
            self.input_mode = InputMode::Positions;
        }
    }

    pub fn new_game(&mut self) {
        self.solver = None;
        self.proposal = None;
        self.undo_stack.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::WordLength;
        self.add_message("New game! How many letters?", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        let Some(previous) = self.undo_stack.pop() else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        };

        if let InputMode::GameOver(state) = self.input_mode {
            self.stats.forget(state);
        }
        self.solver = Some(previous);
        self.input_buffer.clear();
        self.add_message("Undone!", MessageStyle::Info);
        self.after_round();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.solver.as_ref().map_or(0, |s| s.candidates().len())
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if self.input_mode != InputMode::WordLength => self.new_game(),
            KeyCode::Char('u') if self.input_mode != InputMode::WordLength => self.undo_last(),
            KeyCode::Char(c) if c.is_ascii_digit() => self.input_buffer.push(c),
            KeyCode::Char(c @ (' ' | ','))
                if self.input_mode == InputMode::Positions =>
            {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => match self.input_mode {
                InputMode::WordLength => self.submit_length(),
                InputMode::Positions => self.submit_positions(),
                InputMode::GameOver(_) => {}
            },
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> Vec<Word> {
        words_from_slice(&["cat", "car", "can", "dog"])
    }

    fn started(words: &[Word]) -> App<'_> {
        let mut app = App::new(words, StrategyType::default(), 6, Some(10));
        app.input_buffer.push('3');
        app.submit_length();
        app
    }

    fn type_and_submit(app: &mut App, text: &str) {
        app.input_buffer.push_str(text);
        app.submit_positions();
    }

    #[test]
    fn length_entry_starts_a_game() {
        let words = words();
        let app = started(&words);

        assert_eq!(app.input_mode, InputMode::Positions);
        assert_eq!(app.get_candidates_count(), 4);
        assert_eq!(app.proposal, Some(b'a'));
    }

    #[test]
    fn bad_length_keeps_asking() {
        let words = words();
        let mut app = App::new(&words, StrategyType::default(), 6, None);
        app.input_buffer.push_str("99");
        app.submit_length();

        assert_eq!(app.input_mode, InputMode::WordLength);
        assert!(app.solver.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn positions_narrow_the_game() {
        let words = words();
        let mut app = started(&words);

        type_and_submit(&mut app, "2");
        assert_eq!(app.get_candidates_count(), 3);
        assert_eq!(app.proposal, Some(b'c'));
        assert_eq!(app.undo_stack.len(), 1);
    }

    #[test]
    fn illegal_positions_change_nothing() {
        let words = words();
        let mut app = started(&words);

        type_and_submit(&mut app, "4");
        assert_eq!(app.get_candidates_count(), 4);
        assert!(app.undo_stack.is_empty());
        assert_eq!(app.proposal, Some(b'a'));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn revealing_the_word_finishes_the_game() {
        let words = words();
        let mut app = started(&words);

        type_and_submit(&mut app, "2"); // a
        type_and_submit(&mut app, "1"); // c
        type_and_submit(&mut app, "3"); // t

        assert_eq!(app.input_mode, InputMode::GameOver(GameState::WordRevealed));
        assert_eq!(app.stats.solver_wins, 1);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.proposal, None);
    }

    #[test]
    fn undo_restores_previous_round_and_stats() {
        let words = words();
        let mut app = started(&words);

        type_and_submit(&mut app, "2");
        type_and_submit(&mut app, "1");
        type_and_submit(&mut app, "3");
        app.undo_last();

        assert_eq!(app.input_mode, InputMode::Positions);
        assert_eq!(app.stats.total_games, 0);
        assert_eq!(app.proposal, Some(b't'));
        assert_eq!(app.get_candidates_count(), 3);
    }

    #[test]
    fn miss_on_every_word_is_no_match() {
        let words = words();
        let mut app = started(&words);

        // 'a' is not in the word: only "dog" is left
        type_and_submit(&mut app, "");
        assert_eq!(app.get_candidates_count(), 1);

        // ...and the player says 'd' is missing too
        type_and_submit(&mut app, "");
        assert_eq!(app.input_mode, InputMode::GameOver(GameState::NoMatch));
        assert_eq!(app.stats.no_match, 1);
    }

    #[test]
    fn new_game_returns_to_length_entry() {
        let words = words();
        let mut app = started(&words);
        type_and_submit(&mut app, "2");

        app.new_game();
        assert_eq!(app.input_mode, InputMode::WordLength);
        assert!(app.solver.is_none());
        assert!(app.undo_stack.is_empty());
    }

    #[test]
    fn keys_route_by_mode() {
        let words = words();
        let mut app = App::new(&words, StrategyType::default(), 6, None);

        app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "3");

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Positions);

        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn statistics_record_and_forget() {
        let mut stats = Statistics::default();
        stats.record(GameState::BudgetExhausted);
        stats.record(GameState::InProgress);
        assert_eq!(stats.player_wins, 1);
        assert_eq!(stats.total_games, 1);

        stats.forget(GameState::BudgetExhausted);
        assert_eq!(stats, Statistics::default());
    }
}
