//! Accepted-guess dictionary
//!
//! Normalization: surrounding whitespace is trimmed and ASCII letters are
//! lower-cased, both when the dictionary is built and when a guess is looked
//! up. Only words of the dictionary's width can ever be members.

use crate::config::ConfigError;
use crate::core::Word;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    width: usize,
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary of `width`-letter words
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWord` for any entry that is not a
    /// `width`-letter ASCII word.
    ///
    /// # Examples
    /// ```
    /// use wordle_machine::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["hello", "WORLD"], 5).unwrap();
    /// assert!(dictionary.is_valid_guess("world"));
    /// assert!(dictionary.is_valid_guess(" Hello "));
    /// assert!(!dictionary.is_valid_guess("crane"));
    /// ```
    pub fn new<I, S>(words: I, width: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                let raw = w.as_ref();
                Word::with_len(raw, width)
                    .map(|word| word.text().to_string())
                    .map_err(|source| ConfigError::InvalidWord {
                        word: raw.to_string(),
                        source,
                    })
            })
            .collect::<Result<FxHashSet<_>, _>>()?;

        Ok(Self { width, words })
    }

    /// Build a dictionary from already validated words
    #[must_use]
    pub fn from_words(words: &[Word], width: usize) -> Self {
        Self {
            width,
            words: words
                .iter()
                .filter(|w| w.len() == width)
                .map(|w| w.text().to_string())
                .collect(),
        }
    }

    /// Membership test for a complete guess
    #[must_use]
    pub fn is_valid_guess(&self, guess: &str) -> bool {
        let normalized = guess.trim().to_ascii_lowercase();
        normalized.len() == self.width && self.words.contains(&normalized)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
