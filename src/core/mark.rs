//! Per-letter feedback marks

use std::fmt;

/// Feedback for one letter
///
/// Variants are declared in rank order, so the derived `Ord` gives
/// `Initial < Absent < Present < Correct`. Merging feedback across guesses is
/// just [`Ord::max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterMark {
    /// Not scored yet (white)
    #[default]
    Initial,
    /// Not in the word (gray)
    Absent,
    /// In the word, wrong position (yellow)
    Present,
    /// In the word, right position (green)
    Correct,
}

impl LetterMark {
    /// Square emoji used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Initial => '⬛',
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for LetterMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initial => "initial",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [LetterMark; 4] = [
        LetterMark::Initial,
        LetterMark::Absent,
        LetterMark::Present,
        LetterMark::Correct,
    ];

    #[test]
    fn ranking_is_strict() {
        assert!(LetterMark::Initial < LetterMark::Absent);
        assert!(LetterMark::Absent < LetterMark::Present);
        assert!(LetterMark::Present < LetterMark::Correct);
    }

    #[test]
    fn max_never_downgrades_correct() {
        assert_eq!(
            LetterMark::Correct.max(LetterMark::Present),
            LetterMark::Correct
        );
        assert_eq!(
            LetterMark::Absent.max(LetterMark::Initial),
            LetterMark::Absent
        );
    }

    #[test]
    fn default_is_initial() {
        assert_eq!(LetterMark::default(), LetterMark::Initial);
    }

    #[test]
    fn emoji_are_distinct() {
        let emoji: Vec<char> = ALL.iter().map(|m| m.emoji()).collect();
        for (i, a) in emoji.iter().enumerate() {
            assert!(!emoji[i + 1..].contains(a));
        }
    }
}
