//! TUI rendering with ratatui
//!
//! Layout: the gallows and pattern on the left, the solver's view of the
//! candidates and letter scores on the right.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Word;
use crate::output::formatters::{
    create_progress_bar, hangman_frame, outcome_message, render_pattern, thinking_line,
};
use crate::solver::{GameState, Solver, Strategy, StrategyType};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Game board
            Constraint::Percentage(50), // Solver view
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN SOLVER - I guess your word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Gallows
            Constraint::Length(5), // Pattern and proposal
            Constraint::Min(3),    // History
        ])
        .split(area);

    let Some(solver) = &app.solver else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from("Think of a word and type its length."),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Game ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    render_gallows(f, solver, chunks[0]);
    render_word(f, app, solver, chunks[1]);
    render_history(f, solver, chunks[2]);
}

fn render_gallows(f: &mut Frame, solver: &Solver<StrategyType>, area: Rect) {
    let wrong = solver.wrong_guesses();
    let max = solver.config().max_wrong_guesses;
    let color = if wrong * 2 >= max { Color::Red } else { Color::White };

    let lines: Vec<Line> = hangman_frame(wrong, max).lines().map(Line::from).collect();
    let paragraph = Paragraph::new(lines).style(Style::default().fg(color)).block(
        Block::default()
            .title(format!(" Misses {wrong}/{max} "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, app: &App, solver: &Solver<StrategyType>, area: Rect) {
    let mut lines: Vec<Line> = render_pattern_lines(solver);

    let proposal = match (app.proposal, app.input_mode) {
        (Some(letter), InputMode::Positions) => Line::from(vec![
            Span::raw("Is "),
            Span::styled(
                char::from(letter).to_ascii_uppercase().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" in your word?"),
        ]),
        (_, InputMode::GameOver(state)) => outcome_line(state),
        _ => Line::from(""),
    };
    lines.push(proposal);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_pattern_lines(solver: &Solver<StrategyType>) -> Vec<Line<'static>> {
    let rendered = render_pattern(solver.pattern());
    let mut lines = rendered.lines();

    vec![
        Line::from(Span::styled(
            lines.next().unwrap_or_default().to_uppercase(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            lines.next().unwrap_or_default().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn outcome_line(state: GameState) -> Line<'static> {
    let color = match state {
        GameState::WordRevealed => Color::Yellow,
        GameState::BudgetExhausted => Color::Green,
        _ => Color::Red,
    };
    Line::from(Span::styled(
        outcome_message(state).unwrap_or_default(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn render_history(f: &mut Frame, solver: &Solver<StrategyType>, area: Rect) {
    let rounds = solver.rounds();
    let history_items: Vec<ListItem> = rounds
        .iter()
        .enumerate()
        .rev()
        .map(|(i, round)| {
            let style = if round.evidence.is_hit() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            let content = format!(
                "{}: {} | {} → {}",
                i + 1,
                round.evidence,
                round.candidates_before,
                round.candidates_after
            );
            ListItem::new(content).style(style)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Revealed gauge
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(40), // Letter scores
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    if let Some(solver) = &app.solver {
        render_progress(f, solver, chunks[0]);
        render_candidates(f, app, solver, chunks[1]);
        render_scores(f, solver, chunks[2]);
    }
    render_messages(f, app, chunks[3]);
}

fn render_progress(f: &mut Frame, solver: &Solver<StrategyType>, area: Rect) {
    let length = solver.config().word_length;
    let revealed = solver.correct_guesses();
    let percent = (revealed * 100 / length.max(1)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Revealed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(format!("{revealed}/{length} letters"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, solver: &Solver<StrategyType>, area: Rect) {
    let total = solver.candidates().len();
    // Once the player wins, show every word that was still possible
    let shown = match app.input_mode {
        InputMode::GameOver(GameState::BudgetExhausted) => solver.candidates().snapshot(None),
        _ => solver.thinking(),
    };

    let content = if total == 0 {
        vec![Line::from("No words left")]
    } else {
        vec![
            Line::from(format!("{total} words possible")),
            Line::from(thinking_line(shown.iter().map(Word::text), total)),
        ]
    };

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Thinking of ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_scores(f: &mut Frame, solver: &Solver<StrategyType>, area: Rect) {
    let ranked = solver.scores().ranked();
    let top = ranked.first().map_or(0.0, |&(_, score)| score);

    let items: Vec<ListItem> = ranked
        .iter()
        .take(usize::from(area.height.saturating_sub(2)))
        .map(|&(letter, score)| {
            ListItem::new(format!(
                "{} {} {score:.3}",
                char::from(letter).to_ascii_uppercase(),
                create_progress_bar(score, top, 16)
            ))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::Cyan)).block(
        Block::default()
            .title(format!(" Letter scores ({}) ", solver.strategy().name()))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::WordLength => (" Word length | Enter to start ", Color::Cyan),
        InputMode::Positions => (
            " Positions of the letter (e.g. 1 3), empty if missing | Enter to submit ",
            Color::Yellow,
        ),
        InputMode::GameOver(_) => (" Game over | 'n' new game, 'u' undo, 'q' quit ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Strategy: {}", app.strategy.name()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = &app.stats;
    let stats_text = format!(
        "Games: {} | Me: {} You: {}",
        stats.total_games, stats.solver_wins, stats.player_wins
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let candidates_text = format!("Candidates: {}", app.get_candidates_count());
    f.render_widget(
        Paragraph::new(candidates_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::WordLength => "q: Quit | Enter: Start",
        _ => "q: Quit | n: New Game | u: Undo | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
