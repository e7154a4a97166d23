//! Running machine with subscribers
//!
//! `Machine` owns the rules, the word source and the current `(phase, state)`
//! pair. Each `send` runs the transition function to completion and then
//! notifies every subscriber once with the resulting snapshot.

use super::transition::{Rules, transition};
use super::{Event, GameState, Phase};
use crate::config::{ConfigError, GameConfig};
use crate::wordlists::{Dictionary, FixedWord, REFERENCE, REFERENCE_ANSWER, WordSource};
use std::sync::Arc;
use tracing::trace;

/// What a subscriber sees after each processed event
#[derive(Debug, Clone, Copy)]
pub struct Observation<'a> {
    pub phase: Phase,
    pub event: Event,
    pub state: &'a GameState,
}

/// Handle returned by [`Machine::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(&Observation<'_>)>;

pub struct Machine {
    rules: Rules,
    source: Box<dyn WordSource>,
    phase: Phase,
    state: GameState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl Machine {
    /// Build a machine resting in `Idle` with a fresh state
    ///
    /// # Errors
    /// Fails if the board shape is empty, or if the dictionary or word source
    /// produce words of a different width than the board.
    ///
    /// # Examples
    /// ```
    /// use wordle_machine::config::GameConfig;
    /// use wordle_machine::machine::{Event, Machine, Message, Phase};
    /// use wordle_machine::wordlists::{Dictionary, FixedWord};
    ///
    /// let dictionary = Dictionary::new(["hello", "world"], 5).unwrap();
    /// let source = FixedWord::new("world").unwrap();
    /// let mut machine = Machine::new(GameConfig::default(), dictionary, source).unwrap();
    ///
    /// machine.send(Event::Play);
    /// for event in Event::guess("world").unwrap() {
    ///     machine.send(event);
    /// }
    /// assert_eq!(machine.phase(), Phase::GameOver);
    /// assert_eq!(machine.state().message(), Message::Win);
    /// ```
    pub fn new(
        config: GameConfig,
        dictionary: impl Into<Arc<Dictionary>>,
        source: impl WordSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let dictionary = dictionary.into();
        if dictionary.width() != config.cols {
            return Err(ConfigError::DictionaryWidth {
                dictionary: dictionary.width(),
                board: config.cols,
            });
        }
        if source.width() != config.cols {
            return Err(ConfigError::AnswerWidth {
                answer: source.width(),
                board: config.cols,
            });
        }

        Ok(Self {
            state: GameState::new(&config),
            rules: Rules { config, dictionary },
            source: Box::new(source),
            phase: Phase::Idle,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// The reference game: 6×5 board, `hello`/`world` dictionary, answer `world`
    ///
    /// # Errors
    /// Only fails if the embedded reference list is malformed.
    pub fn reference() -> Result<Self, ConfigError> {
        let config = GameConfig::default();
        Self::new(
            config,
            Dictionary::new(REFERENCE, config.cols)?,
            FixedWord::new(REFERENCE_ANSWER)?,
        )
    }

    /// Process one event and every automatic step after it
    pub fn send(&mut self, event: Event) -> (Phase, &GameState) {
        let (phase, state) = transition(
            &self.rules,
            self.source.as_mut(),
            self.phase,
            &self.state,
            event,
        );
        trace!(%event, from = %self.phase, to = %phase, "transition");
        self.phase = phase;
        self.state = state;

        let observation = Observation {
            phase: self.phase,
            event,
            state: &self.state,
        };
        for (_, listener) in &mut self.listeners {
            listener(&observation);
        }

        (self.phase, &self.state)
    }

    /// Send events in order, returning the final phase
    pub fn send_all(&mut self, events: impl IntoIterator<Item = Event>) -> Phase {
        for event in events {
            self.send(event);
        }
        self.phase
    }

    /// Call `listener` after every processed event
    pub fn subscribe(&mut self, listener: impl FnMut(&Observation<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.rules.config
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.rules.dictionary
    }

    /// Owned copy of the current phase and state
    #[must_use]
    pub fn snapshot(&self) -> (Phase, GameState) {
        (self.phase, self.state.clone())
    }
}
