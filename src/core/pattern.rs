//! Guess scoring
//!
//! A `Pattern` holds one mark per position of a guess. The default scoring
//! rule is position/membership based:
//! - `Correct` when the guessed letter equals the answer letter at that position
//! - `Absent` when the guessed letter occurs nowhere in the answer
//! - `Present` otherwise
//!
//! Present marks are *not* capped by how many unmatched copies of a letter the
//! answer still has. Guessing `speed` against `erase` marks both `e`s present.
//! The frequency-limited rule of standard Wordle is available as
//! [`Scoring::Standard`] and must be selected explicitly.

use super::{LetterMark, Word};
use std::fmt;

/// Rule used to turn a guess into marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Position/membership rule, no duplicate capping
    #[default]
    Membership,
    /// Two-pass, frequency-limited rule
    Standard,
}

impl Scoring {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "membership" | "simple" => Some(Self::Membership),
            "standard" | "wordle" => Some(Self::Standard),
            _ => None,
        }
    }

    /// Score `guess` against `answer` with this rule
    #[must_use]
    pub fn score(self, guess: &Word, answer: &Word) -> Pattern {
        match self {
            Self::Membership => Pattern::evaluate(guess, answer),
            Self::Standard => Pattern::evaluate_standard(guess, answer),
        }
    }
}

/// Feedback marks for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<LetterMark>);

impl Pattern {
    /// Wrap a row of marks
    #[must_use]
    pub const fn new(marks: Vec<LetterMark>) -> Self {
        Self(marks)
    }

    /// Score a guess with the position/membership rule
    ///
    /// Both words must have the same length; the state machine only lets
    /// full-length guesses reach this point.
    ///
    /// # Panics
    /// Panics in debug builds if the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_machine::core::{LetterMark::*, Pattern, Word};
    ///
    /// let guess = Word::new("hello").unwrap();
    /// let answer = Word::new("world").unwrap();
    /// let pattern = Pattern::evaluate(&guess, &answer);
    ///
    /// assert_eq!(pattern.marks(), &[Absent, Absent, Present, Correct, Present]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let marks = guess
            .chars()
            .iter()
            .zip(answer.chars())
            .map(|(&g, &a)| {
                if g == a {
                    LetterMark::Correct
                } else if answer.has_letter(g) {
                    LetterMark::Present
                } else {
                    LetterMark::Absent
                }
            })
            .collect();

        Self(marks)
    }

    /// Score a guess with the frequency-limited standard Wordle rule
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the letter pool
    /// 2. Second pass: mark present letters while the pool still has copies
    ///
    /// # Panics
    /// Panics in debug builds if the lengths differ.
    #[must_use]
    pub fn evaluate_standard(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let mut marks = vec![LetterMark::Absent; guess.len()];
        let mut available = answer.letter_counts();

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = LetterMark::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == LetterMark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                marks[i] = LetterMark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[LetterMark] {
        &self.0
    }

    /// Emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
