//! Where the secret answer of a round comes from

use crate::config::ConfigError;
use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Supplies the answer each time a round starts
pub trait WordSource {
    /// Width of every word this source returns
    fn width(&self) -> usize;

    /// Answer for the next round
    fn next_word(&mut self) -> Word;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn next_word(&mut self) -> Word {
        (**self).next_word()
    }
}

/// Always returns the same word
#[derive(Debug, Clone)]
pub struct FixedWord(Word);

impl FixedWord {
    /// # Errors
    /// Returns `ConfigError::InvalidWord` if `word` is not an ASCII word.
    pub fn new(word: &str) -> Result<Self, ConfigError> {
        Word::new(word)
            .map(Self)
            .map_err(|source| ConfigError::InvalidWord {
                word: word.to_string(),
                source,
            })
    }
}

impl WordSource for FixedWord {
    fn width(&self) -> usize {
        self.0.len()
    }

    fn next_word(&mut self) -> Word {
        self.0.clone()
    }
}

/// Uniform random choice from an answer list
pub struct RandomWord {
    words: Vec<Word>,
    width: usize,
    rng: StdRng,
}

impl RandomWord {
    /// Random source seeded from the OS
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` for an empty list and
    /// `ConfigError::InvalidWord` if the words differ in length.
    pub fn new(words: Vec<Word>) -> Result<Self, ConfigError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Reproducible source for a given seed
    ///
    /// # Errors
    /// Same as [`RandomWord::new`].
    pub fn seeded(words: Vec<Word>, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Result<Self, ConfigError> {
        let width = words.first().ok_or(ConfigError::EmptyWordList)?.len();
        if let Some(odd) = words.iter().find(|w| w.len() != width) {
            return Err(ConfigError::InvalidWord {
                word: odd.text().to_string(),
                source: crate::core::WordError::InvalidLength {
                    expected: width,
                    actual: odd.len(),
                },
            });
        }
        Ok(Self { words, width, rng })
    }
}

impl WordSource for RandomWord {
    fn width(&self) -> usize {
        self.width
    }

    fn next_word(&mut self) -> Word {
        // non-empty by construction
        self.words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| self.words[0].clone())
    }
}
