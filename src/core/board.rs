//! The guess grid
//!
//! A fixed `rows × cols` grid of cells. Rows are written once, in order, when
//! a guess is committed; a committed row is never touched again.

use super::{LetterMark, Pattern, Word};
use std::fmt;

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub mark: LetterMark,
}

impl Cell {
    pub const EMPTY: Self = Self {
        letter: None,
        mark: LetterMark::Initial,
    };

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// Why a row could not be committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    RowOutOfRange { row: usize, rows: usize },
    RowAlreadyCommitted(usize),
    WidthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfRange { row, rows } => {
                write!(f, "Row {row} is outside a board of {rows} rows")
            }
            Self::RowAlreadyCommitted(row) => write!(f, "Row {row} is already committed"),
            Self::WidthMismatch { expected, actual } => {
                write!(f, "Row needs {expected} letters and marks, got {actual}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// An empty board
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows * cols],
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cells of row `index`
    ///
    /// # Panics
    /// Panics if `index >= self.rows()`
    #[must_use]
    pub fn row(&self, index: usize) -> &[Cell] {
        assert!(index < self.rows, "row {index} out of range");
        let start = index * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// The letters of a row as a string, empty cells skipped
    #[must_use]
    pub fn row_text(&self, index: usize) -> String {
        self.row(index).iter().filter_map(|c| c.letter).collect()
    }

    /// True when every cell of the row is empty
    #[must_use]
    pub fn is_row_empty(&self, index: usize) -> bool {
        self.row(index).iter().all(|c| *c == Cell::EMPTY)
    }

    /// Return a copy of the board with row `index` holding `guess` and its marks
    ///
    /// # Errors
    /// Fails if the row is out of range, already written, or the guess/pattern
    /// width doesn't match the board.
    pub fn with_committed_row(
        &self,
        index: usize,
        guess: &Word,
        pattern: &Pattern,
    ) -> Result<Self, BoardError> {
        if index >= self.rows {
            return Err(BoardError::RowOutOfRange {
                row: index,
                rows: self.rows,
            });
        }
        for width in [guess.len(), pattern.marks().len()] {
            if width != self.cols {
                return Err(BoardError::WidthMismatch {
                    expected: self.cols,
                    actual: width,
                });
            }
        }
        if !self.is_row_empty(index) {
            return Err(BoardError::RowAlreadyCommitted(index));
        }

        let mut board = self.clone();
        let start = index * self.cols;
        for (cell, (&letter, &mark)) in board.cells[start..start + self.cols]
            .iter_mut()
            .zip(guess.chars().iter().zip(pattern.marks()))
        {
            *cell = Cell {
                letter: Some(char::from(letter)),
                mark,
            };
        }
        Ok(board)
    }
}
