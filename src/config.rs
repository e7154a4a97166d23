//! Game configuration
//!
//! Everything here is fixed when a machine is built and never changes while it
//! runs.

use crate::core::{Scoring, WordError};
use std::fmt;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 5;

/// Board shape and scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub scoring: Scoring,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            scoring: Scoring::Membership,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub const fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    #[must_use]
    pub const fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Reject shapes no round can be played on
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroRows` or `ConfigError::ZeroCols`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        Ok(())
    }
}

/// Construction-time configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroRows,
    ZeroCols,
    InvalidWord { word: String, source: WordError },
    EmptyWordList,
    DictionaryWidth { dictionary: usize, board: usize },
    AnswerWidth { answer: usize, board: usize },
    UnknownScoring(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRows => write!(f, "Board must have at least one row"),
            Self::ZeroCols => write!(f, "Board must have at least one column"),
            Self::InvalidWord { word, source } => write!(f, "Invalid word '{word}': {source}"),
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::DictionaryWidth { dictionary, board } => write!(
                f,
                "Dictionary holds {dictionary}-letter words but the board has {board} columns"
            ),
            Self::AnswerWidth { answer, board } => write!(
                f,
                "Word source yields {answer}-letter answers but the board has {board} columns"
            ),
            Self::UnknownScoring(name) => {
                write!(f, "Unknown scoring rule '{name}' (expected membership or standard)")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}
