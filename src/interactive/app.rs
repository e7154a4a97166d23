//! TUI application state and logic

use crate::machine::{Event as GameEvent, Machine, Message as Outcome, Phase};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub machine: Machine,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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

/// Results across rounds played in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won with exactly `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl App {
    #[must_use]
    pub fn new(machine: Machine) -> Self {
        let rows = machine.config().rows;
        Self {
            machine,
            messages: vec![Message {
                text: "Press Enter to start a game.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; rows + 1],
                ..Statistics::default()
            },
            should_quit: false,
        }
    }

    /// Translate one key press into machine events
    ///
    /// Letters only count when typed plain or with Shift.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => match self.machine.phase() {
                Phase::Idle => self.dispatch(GameEvent::Play),
                Phase::GameOver => {
                    self.dispatch(GameEvent::Reset);
                    self.dispatch(GameEvent::Play);
                }
                _ => self.dispatch(GameEvent::Enter),
            },
            KeyCode::Backspace => self.dispatch(GameEvent::Backspace),
            KeyCode::Char(c) if plain && c.is_ascii_alphabetic() => {
                self.dispatch(GameEvent::Letter(c));
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        // ENTER on a short row is ignored by the machine and leaves the old message
        let submitted = event == GameEvent::Enter
            && self.machine.phase() == Phase::Playing
            && self.machine.state().pending_guess().len() == self.machine.config().cols;

        let (phase, state) = self.machine.send(event);
        let outcome = state.message();
        let row = state.current_row_index();
        let guess = state.pending_guess().to_uppercase();
        let answer = state.answer().map(|w| w.text().to_uppercase());

        match (event, outcome) {
            (GameEvent::Play, _) if phase == Phase::Playing => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            (GameEvent::Enter, _) if !submitted => {}
            (GameEvent::Enter, Outcome::Invalid) => {
                self.add_message(&format!("'{guess}' is not in the word list"), MessageStyle::Error);
            }
            (GameEvent::Enter, Outcome::Win) => {
                self.record(true, row);
                self.add_message(&format!("🎉 Solved in {row}!"), MessageStyle::Success);
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
            (GameEvent::Enter, Outcome::Lose) => {
                self.record(false, row);
                let answer = answer.unwrap_or_default();
                self.add_message(&format!("Out of guesses. The word was {answer}"), MessageStyle::Error);
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
            _ => {}
        }
    }

    fn record(&mut self, won: bool, guesses: usize) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > 5 {
            self.messages.remove(0);
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
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
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

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn enter_starts_and_restarts() {
        let mut app = App::new(Machine::reference().unwrap());
        assert_eq!(app.machine.phase(), Phase::Idle);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.machine.phase(), Phase::Playing);

        type_word(&mut app, "world");
        assert_eq!(app.machine.phase(), Phase::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.machine.phase(), Phase::Playing);
        assert_eq!(app.machine.state().current_row_index(), 0);
    }

    #[test]
    fn invalid_guess_adds_error() {
        let mut app = App::new(Machine::reference().unwrap());
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "crane");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("CRANE"));

        for _ in 0..5 {
            press(&mut app, KeyCode::Backspace);
        }
        assert_eq!(app.machine.state().pending_guess(), "");
    }

    #[test]
    fn enter_on_short_row_after_invalid_adds_nothing() {
        let mut app = App::new(Machine::reference().unwrap());
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        let texts: Vec<&str> = app.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["New game started!", "'CRANE' is not in the word list"]
        );
        assert_eq!(app.machine.state().pending_guess(), "cran");
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let mut app = App::new(Machine::reference().unwrap());
        press(&mut app, KeyCode::Enter);
        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.machine.state().pending_guess(), "");

        app.handle_key(KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT));
        assert_eq!(app.machine.state().pending_guess(), "h");
    }

    #[test]
    fn non_letters_are_ignored_and_esc_quits() {
        let mut app = App::new(Machine::reference().unwrap());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.machine.state().pending_guess(), "");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn losing_is_counted() {
        let mut app = App::new(Machine::reference().unwrap());
        press(&mut app, KeyCode::Enter);
        for _ in 0..6 {
            type_word(&mut app, "hello");
        }
        assert_eq!(app.machine.state().message(), Outcome::Lose);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("WORLD")));
    }
}
