//! Phases and the game context

use crate::config::GameConfig;
use crate::core::{Board, Keyboard, Word};
use std::fmt;

/// Where the machine is in a round
///
/// `Validating` and `Scoring` are transient: a processed event never leaves
/// the machine in either of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    Validating,
    Scoring,
    GameOver,
}

impl Phase {
    /// True for phases that resolve on their own without an event
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Validating | Self::Scoring)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Validating => "validating",
            Self::Scoring => "scoring",
            Self::GameOver => "gameOver",
        };
        f.write_str(name)
    }
}

/// Outcome of the last submitted guess, for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Message {
    #[default]
    None,
    Invalid,
    Win,
    Lose,
    Continue,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::None => "",
            Self::Invalid => "INVALID",
            Self::Win => "WIN",
            Self::Lose => "LOSE",
            Self::Continue => "CONTINUE",
        };
        f.write_str(tag)
    }
}

/// Everything the machine knows about the current round
///
/// Invariants kept by the transition function:
/// - `pending_guess` never holds more than `cols` letters
/// - `current_row` is in `0..=rows` and only grows within a round
/// - board rows at or after `current_row` are empty
/// - keyboard marks never decrease within a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) answer: Option<Word>,
    pub(super) pending_guess: String,
    pub(super) current_row: usize,
    pub(super) board: Board,
    pub(super) keyboard: Keyboard,
    pub(super) message: Message,
}

impl GameState {
    /// A fresh context, as entered on start-up and after every reset
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            answer: None,
            pending_guess: String::new(),
            current_row: 0,
            board: Board::new(config.rows, config.cols),
            keyboard: Keyboard::new(),
            message: Message::None,
        }
    }

    /// The secret word, set once a round is started
    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    /// Letters typed for the row being entered
    #[must_use]
    pub fn pending_guess(&self) -> &str {
        &self.pending_guess
    }

    /// Number of committed rows
    #[must_use]
    pub const fn current_row_index(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub const fn message(&self) -> Message {
        self.message
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.board.rows()
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Text of the most recently committed row
    #[must_use]
    pub fn last_committed_guess(&self) -> Option<String> {
        self.current_row
            .checked_sub(1)
            .map(|row| self.board.row_text(row))
    }

    /// Rows left to guess in this round
    #[must_use]
    pub const fn remaining_rows(&self) -> usize {
        self.board.rows().saturating_sub(self.current_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_empty() {
        let state = GameState::new(&GameConfig::default());
        assert!(state.answer().is_none());
        assert_eq!(state.pending_guess(), "");
        assert_eq!(state.current_row_index(), 0);
        assert_eq!((state.rows(), state.cols()), (6, 5));
        assert!(state.keyboard().is_empty());
        assert_eq!(state.message(), Message::None);
        assert_eq!(state.last_committed_guess(), None);
        assert_eq!(state.remaining_rows(), 6);
    }

    #[test]
    fn transient_phases() {
        assert!(Phase::Validating.is_transient());
        assert!(Phase::Scoring.is_transient());
        assert!(!Phase::Playing.is_transient());
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn display_tags() {
        assert_eq!(Phase::GameOver.to_string(), "gameOver");
        assert_eq!(Message::Invalid.to_string(), "INVALID");
        assert_eq!(Message::None.to_string(), "");
    }
}
