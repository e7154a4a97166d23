//! Keyboard feedback aggregation
//!
//! Tracks the best mark seen for every letter across the committed rows of a
//! round. Marks only ever move up the `LetterMark` ranking.

use super::{LetterMark, Pattern, Word};
use rustc_hash::FxHashMap;

/// Letters in the order of a QWERTY keyboard, one slice per row
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyboard {
    marks: FxHashMap<char, LetterMark>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best mark seen for `letter`, `Initial` if it was never scored
    #[must_use]
    pub fn mark(&self, letter: char) -> LetterMark {
        self.marks
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Raise `letter` to `mark` unless it already ranks higher
    pub fn merge_mark(&mut self, letter: char, mark: LetterMark) {
        let entry = self
            .marks
            .entry(letter.to_ascii_lowercase())
            .or_default();
        *entry = (*entry).max(mark);
    }

    /// Merge one scored row, letter by letter in column order
    pub fn merge_row(&mut self, guess: &Word, pattern: &Pattern) {
        for (&letter, &mark) in guess.chars().iter().zip(pattern.marks()) {
            self.merge_mark(char::from(letter), mark);
        }
    }

    /// Letters that have been scored at least once
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Scored letters with their marks, sorted alphabetically
    #[must_use]
    pub fn entries(&self) -> Vec<(char, LetterMark)> {
        let mut entries: Vec<_> = self.marks.iter().map(|(&c, &m)| (c, m)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }
}
