//! TUI rendering with ratatui
//!
//! Board with the row being typed, keyboard, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::{LetterMark, QWERTY_ROWS};
use crate::machine::{GameState, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(main_chunks[0]);

    let state = app.machine.state();
    render_board(f, app.machine.phase(), state, left[0]);
    render_keyboard(f, state, left[1]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
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

fn mark_style(mark: LetterMark) -> Style {
    match mark {
        LetterMark::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterMark::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterMark::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterMark::Initial => Style::default().add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: Option<char>, mark: LetterMark) -> Span<'static> {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    Span::styled(text, mark_style(mark))
}

fn board_lines(phase: Phase, state: &GameState) -> Vec<Line<'static>> {
    state
        .board()
        .iter_rows()
        .enumerate()
        .map(|(i, row)| {
            let spans: Vec<Span> = if i == state.current_row_index() && phase == Phase::Playing {
                let mut pending = state.pending_guess().chars();
                (0..state.cols())
                    .flat_map(|_| [tile(pending.next(), LetterMark::Initial), Span::raw(" ")])
                    .collect()
            } else {
                row.iter()
                    .flat_map(|cell| [tile(cell.letter, cell.mark), Span::raw(" ")])
                    .collect()
            };
            Line::from(spans)
        })
        .collect()
}

fn render_board(f: &mut Frame, phase: Phase, state: &GameState, area: Rect) {
    let board = Paragraph::new(board_lines(phase, state))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Board ({phase}) "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, state: &GameState, area: Rect) {
    let lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|c| tile(Some(c), state.keyboard().mark(c)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let state = app.machine.state();
    let row_text = format!("Guess {}/{}", state.current_row_index(), state.rows());
    f.render_widget(Paragraph::new(row_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help_text = match app.machine.phase() {
        Phase::Playing => "Esc: Quit | Enter: Submit | Backspace: Delete",
        _ => "Esc: Quit | Enter: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
