//! Core domain types for Wordle
//!
//! Words, marks, guess scoring, the board and keyboard aggregation. Nothing in
//! here knows about phases or events.

mod board;
mod keyboard;
mod mark;
mod pattern;
mod word;

pub use board::{Board, BoardError, Cell};
pub use keyboard::{Keyboard, QWERTY_ROWS};
pub use mark::LetterMark;
pub use pattern::{Pattern, Scoring};
pub use word::{Word, WordError};
