//! Formatting utilities for terminal output

use crate::core::{Cell, Keyboard, LetterMark, QWERTY_ROWS};
use crate::machine::GameState;
use colored::{ColoredString, Colorize};

/// A letter tile colored by its mark
#[must_use]
pub fn colored_tile(letter: Option<char>, mark: LetterMark) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    match mark {
        LetterMark::Correct => text.black().on_green().bold(),
        LetterMark::Present => text.black().on_yellow().bold(),
        LetterMark::Absent => text.white().on_bright_black(),
        LetterMark::Initial => text.bold(),
    }
}

/// One board row as colored tiles
#[must_use]
pub fn format_row(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| colored_tile(cell.letter, cell.mark).to_string())
        .collect()
}

/// The row being typed, padded with blanks to `cols`
#[must_use]
pub fn format_pending_row(pending: &str, cols: usize) -> String {
    let mut letters = pending.chars();
    (0..cols)
        .map(|_| colored_tile(letters.next(), LetterMark::Initial).to_string())
        .collect()
}

/// The keyboard as three colored lines, indented like a real keyboard
#[must_use]
pub fn format_keyboard(keyboard: &Keyboard) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|c| colored_tile(Some(c), keyboard.mark(c)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Committed rows as emoji lines, ready to share
#[must_use]
pub fn share_grid(state: &GameState) -> String {
    state
        .board()
        .iter_rows()
        .take(state.current_row_index())
        .map(|row| row.iter().map(|c| c.mark.emoji()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Uncolored cell dump, one line per non-empty cell
#[must_use]
pub fn cell_lines(state: &GameState) -> Vec<String> {
    state
        .board()
        .iter_rows()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter().enumerate().filter_map(move |(j, cell)| {
                cell.letter
                    .map(|letter| format!("[{i}][{j}] '{letter}' '{}'", cell.mark))
            })
        })
        .collect()
}
