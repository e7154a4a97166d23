//! The transition function
//!
//! `transition` maps `(phase, state, event)` to the next `(phase, state)`. An
//! external event is applied first, then the automatic steps out of
//! `Validating` and `Scoring` run until the machine rests in a stable phase.
//!
//! Guards are checked in the order listed in each `match` arm and the first
//! one that holds wins. Any event not handled for the current phase returns the
//! input unchanged.

use super::{Event, GameState, Message, Phase};
use crate::config::GameConfig;
use crate::core::{Board, Keyboard, Word};
use crate::wordlists::{Dictionary, WordSource};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Fixed inputs of the transition function
#[derive(Debug, Clone)]
pub struct Rules {
    pub config: GameConfig,
    pub dictionary: Arc<Dictionary>,
}

/// Apply `event` and every automatic step that follows it
///
/// `source` is only consulted when a round starts.
#[must_use]
pub fn transition(
    rules: &Rules,
    source: &mut dyn WordSource,
    phase: Phase,
    state: &GameState,
    event: Event,
) -> (Phase, GameState) {
    let (mut phase, mut state) = on_event(rules, source, phase, state, event);

    while let Some((next_phase, next_state)) = auto_step(rules, phase, &state) {
        phase = next_phase;
        state = next_state;
    }

    (phase, state)
}

fn on_event(
    rules: &Rules,
    source: &mut dyn WordSource,
    phase: Phase,
    state: &GameState,
    event: Event,
) -> (Phase, GameState) {
    match (phase, event) {
        (_, Event::Reset) => (Phase::Idle, actions::init_context(&rules.config)),
        (Phase::Idle, Event::Play) => {
            let answer = source.next_word();
            (Phase::Playing, actions::start_round(&rules.config, answer))
        }
        (Phase::Playing, Event::Letter(letter)) => {
            if !guards::is_letter(letter) {
                warn!(?letter, "rejected letter input");
                (phase, state.clone())
            } else if guards::has_room(state) {
                (Phase::Playing, actions::fill_cell(state, letter))
            } else {
                (phase, state.clone())
            }
        }
        (Phase::Playing, Event::Backspace) if guards::has_letters(state) => {
            (Phase::Playing, actions::clear_cell(state))
        }
        (Phase::Playing, Event::Enter) if guards::is_complete(state) => {
            (Phase::Validating, state.clone())
        }
        _ => (phase, state.clone()),
    }
}

/// One automatic step, `None` once the phase is stable
fn auto_step(rules: &Rules, phase: Phase, state: &GameState) -> Option<(Phase, GameState)> {
    match phase {
        Phase::Validating => Some(if guards::is_valid(&rules.dictionary, state) {
            match actions::complete_row(&rules.config, state) {
                Some(next) => (Phase::Scoring, next),
                None => (Phase::Playing, actions::set_message(state, Message::Invalid)),
            }
        } else {
            (Phase::Playing, actions::set_message(state, Message::Invalid))
        }),
        Phase::Scoring => Some(if guards::is_win(state) {
            (Phase::GameOver, actions::set_message(state, Message::Win))
        } else if guards::is_lose(state) {
            (Phase::GameOver, actions::set_message(state, Message::Lose))
        } else {
            (Phase::Playing, actions::set_message(state, Message::Continue))
        }),
        Phase::Idle | Phase::Playing | Phase::GameOver => None,
    }
}

mod guards {
    use super::{Dictionary, GameState, debug};

    pub(super) const fn is_letter(letter: char) -> bool {
        letter.is_ascii_alphabetic()
    }

    pub(super) fn has_room(state: &GameState) -> bool {
        state.pending_guess.len() < state.cols()
    }

    pub(super) fn has_letters(state: &GameState) -> bool {
        !state.pending_guess.is_empty()
    }

    pub(super) fn is_complete(state: &GameState) -> bool {
        state.pending_guess.len() == state.cols()
    }

    pub(super) fn is_valid(dictionary: &Dictionary, state: &GameState) -> bool {
        let valid = dictionary.is_valid_guess(&state.pending_guess);
        debug!(guess = %state.pending_guess, valid, "is valid");
        valid
    }

    /// Checked after the row is committed
    pub(super) fn is_win(state: &GameState) -> bool {
        let win = match (state.last_committed_guess(), state.answer()) {
            (Some(guess), Some(answer)) => guess == answer.text(),
            _ => false,
        };
        debug!(win, "is win");
        win
    }

    pub(super) fn is_lose(state: &GameState) -> bool {
        let lose = state.current_row >= state.rows();
        debug!(lose, row = state.current_row, "is lose");
        lose
    }
}

mod actions {
    use super::{Board, GameConfig, GameState, Keyboard, Message, Word, debug, error};

    pub(super) fn init_context(config: &GameConfig) -> GameState {
        debug!("init context");
        GameState::new(config)
    }

    pub(super) fn start_round(config: &GameConfig, answer: Word) -> GameState {
        debug!(answer = %answer, "start round");
        GameState {
            answer: Some(answer),
            pending_guess: String::new(),
            current_row: 0,
            board: Board::new(config.rows, config.cols),
            keyboard: Keyboard::new(),
            message: Message::None,
        }
    }

    pub(super) fn fill_cell(state: &GameState, letter: char) -> GameState {
        let mut next = state.clone();
        next.pending_guess.push(letter.to_ascii_lowercase());
        debug!(guess = %next.pending_guess, "fill cell");
        next
    }

    pub(super) fn clear_cell(state: &GameState) -> GameState {
        let mut next = state.clone();
        next.pending_guess.pop();
        debug!(guess = %next.pending_guess, "clear cell");
        next
    }

    /// Score the pending guess into the next board row
    ///
    /// `None` only if the round has no answer or the row can't be written,
    /// neither of which the guards allow.
    pub(super) fn complete_row(config: &GameConfig, state: &GameState) -> Option<GameState> {
        let Some(answer) = state.answer.as_ref() else {
            error!("guess submitted without an answer");
            return None;
        };
        let guess = match Word::with_len(&state.pending_guess, config.cols) {
            Ok(guess) => guess,
            Err(e) => {
                error!(guess = %state.pending_guess, "pending guess is not a word: {e}");
                return None;
            }
        };

        let pattern = config.scoring.score(&guess, answer);
        let board = match state
            .board
            .with_committed_row(state.current_row, &guess, &pattern)
        {
            Ok(board) => board,
            Err(e) => {
                error!(row = state.current_row, "cannot commit row: {e}");
                return None;
            }
        };

        let mut keyboard = state.keyboard.clone();
        keyboard.merge_row(&guess, &pattern);

        debug!(guess = %guess, pattern = %pattern, row = state.current_row, "complete row");

        Some(GameState {
            answer: state.answer.clone(),
            pending_guess: String::new(),
            current_row: state.current_row + 1,
            board,
            keyboard,
            message: state.message,
        })
    }

    pub(super) fn set_message(state: &GameState, message: Message) -> GameState {
        debug!(%message, "set message");
        GameState {
            message,
            ..state.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterMark;
    use crate::wordlists::{ALLOWED, FixedWord};

    fn rules(words: &[&str]) -> Rules {
        Rules {
            config: GameConfig::default(),
            dictionary: Arc::new(Dictionary::new(words, 5).unwrap()),
        }
    }

    struct Harness {
        rules: Rules,
        source: FixedWord,
        phase: Phase,
        state: GameState,
    }

    impl Harness {
        fn new(words: &[&str], answer: &str) -> Self {
            let rules = rules(words);
            let state = GameState::new(&rules.config);
            Self {
                rules,
                source: FixedWord::new(answer).unwrap(),
                phase: Phase::Idle,
                state,
            }
        }

        fn send(&mut self, event: Event) {
            let (phase, state) =
                transition(&self.rules, &mut self.source, self.phase, &self.state, event);
            self.phase = phase;
            self.state = state;
        }

        fn type_word(&mut self, word: &str) {
            for event in Event::letters(word).unwrap() {
                self.send(event);
            }
        }

        fn guess(&mut self, word: &str) {
            for event in Event::guess(word).unwrap() {
                self.send(event);
            }
        }
    }

    #[test]
    fn play_starts_round() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        assert_eq!(h.phase, Phase::Playing);
        assert_eq!(h.state.answer().map(Word::text), Some("world"));
        assert_eq!(h.state.current_row_index(), 0);
    }

    #[test]
    fn events_before_play_are_ignored() {
        let mut h = Harness::new(&["hello", "world"], "world");
        let fresh = h.state.clone();
        for event in [Event::Letter('a'), Event::Backspace, Event::Enter] {
            h.send(event);
            assert_eq!(h.phase, Phase::Idle);
            assert_eq!(h.state, fresh);
        }
    }

    #[test]
    fn letters_fill_then_stop_at_width() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.type_word("hello");
        assert_eq!(h.state.pending_guess(), "hello");

        let full = h.state.clone();
        h.send(Event::Letter('x'));
        assert_eq!(h.state, full);
    }

    #[test]
    fn uppercase_letters_are_lowered() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.send(Event::Letter('W'));
        assert_eq!(h.state.pending_guess(), "w");
    }

    #[test]
    fn malformed_letter_is_a_noop() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.send(Event::Letter('h'));
        let before = h.state.clone();
        for bad in ['1', ' ', 'é', '🟩'] {
            h.send(Event::Letter(bad));
            assert_eq!(h.state, before);
            assert_eq!(h.phase, Phase::Playing);
        }
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.type_word("he");
        h.send(Event::Backspace);
        assert_eq!(h.state.pending_guess(), "h");
        h.send(Event::Backspace);
        let empty = h.state.clone();
        h.send(Event::Backspace);
        assert_eq!(h.state, empty);
    }

    #[test]
    fn enter_on_short_guess_is_a_noop() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.type_word("hell");
        let before = h.state.clone();
        h.send(Event::Enter);
        assert_eq!(h.phase, Phase::Playing);
        assert_eq!(h.state, before);
    }

    #[test]
    fn valid_wrong_guess_continues() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.guess("hello");

        assert_eq!(h.phase, Phase::Playing);
        assert_eq!(h.state.message(), Message::Continue);
        assert_eq!(h.state.current_row_index(), 1);
        assert_eq!(h.state.pending_guess(), "");
        assert_eq!(h.state.board().row_text(0), "hello");
        assert_eq!(h.state.keyboard().mark('l'), LetterMark::Correct);
        assert_eq!(h.state.keyboard().mark('h'), LetterMark::Absent);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.guess("world");

        assert_eq!(h.phase, Phase::GameOver);
        assert_eq!(h.state.message(), Message::Win);
        assert!(
            h.state
                .board()
                .row(0)
                .iter()
                .all(|c| c.mark == LetterMark::Correct)
        );
    }

    #[test]
    fn invalid_guess_keeps_row() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.guess("xxxxx");

        assert_eq!(h.phase, Phase::Playing);
        assert_eq!(h.state.message(), Message::Invalid);
        assert_eq!(h.state.current_row_index(), 0);
        assert_eq!(h.state.pending_guess(), "xxxxx");
        assert!(h.state.board().is_row_empty(0));
    }

    #[test]
    fn uncommittable_row_is_reported_invalid() {
        // a full guess with no answer drawn can't be scored
        let mut h = Harness::new(&["hello", "world"], "world");
        h.state.pending_guess = "hello".to_string();
        h.phase = Phase::Validating;
        h.send(Event::Backspace);

        assert_eq!(h.phase, Phase::Playing);
        assert_eq!(h.state.message(), Message::Invalid);
        assert_eq!(h.state.current_row_index(), 0);
        assert!(h.state.board().is_row_empty(0));
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut h = Harness::new(ALLOWED, "world");
        h.send(Event::Play);
        for word in ["hello", "crane", "about", "fight", "pizza", "jumbo"] {
            assert_eq!(h.phase, Phase::Playing);
            if word == "pizza" {
                // not in the list, does not use up a row
                h.guess(word);
                assert_eq!(h.state.message(), Message::Invalid);
                for _ in 0..5 {
                    h.send(Event::Backspace);
                }
                h.guess("sugar");
            } else {
                h.guess(word);
            }
        }
        assert_eq!(h.phase, Phase::GameOver);
        assert_eq!(h.state.message(), Message::Lose);
        assert_eq!(h.state.current_row_index(), 6);
    }

    #[test]
    fn win_on_last_row_beats_lose() {
        let mut h = Harness::new(ALLOWED, "world");
        h.send(Event::Play);
        for word in ["hello", "crane", "about", "fight", "sugar"] {
            h.guess(word);
        }
        h.guess("world");
        assert_eq!(h.phase, Phase::GameOver);
        assert_eq!(h.state.message(), Message::Win);
    }

    #[test]
    fn game_over_ignores_everything_but_reset() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.guess("world");
        let over = h.state.clone();
        for event in [Event::Play, Event::Letter('a'), Event::Backspace, Event::Enter] {
            h.send(event);
            assert_eq!(h.phase, Phase::GameOver);
            assert_eq!(h.state, over);
        }
        h.send(Event::Reset);
        assert_eq!(h.phase, Phase::Idle);
        assert_eq!(h.state, GameState::new(&GameConfig::default()));
    }

    #[test]
    fn reset_from_every_phase_restores_fresh_state() {
        let fresh = GameState::new(&GameConfig::default());
        let mut h = Harness::new(&["hello", "world"], "world");

        h.send(Event::Reset);
        assert_eq!((h.phase, &h.state), (Phase::Idle, &fresh));

        h.send(Event::Play);
        h.guess("hello");
        h.type_word("wor");
        h.send(Event::Reset);
        assert_eq!((h.phase, &h.state), (Phase::Idle, &fresh));
    }

    #[test]
    fn play_while_playing_is_ignored() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        h.guess("hello");
        let before = h.state.clone();
        h.send(Event::Play);
        assert_eq!(h.state, before);
    }

    #[test]
    fn transient_phases_never_escape() {
        let mut h = Harness::new(&["hello", "world"], "world");
        h.send(Event::Play);
        for word in ["xxxxx", "hello", "world"] {
            for event in Event::guess(word).unwrap() {
                h.send(event);
                assert!(!h.phase.is_transient());
            }
            h.send(Event::Backspace);
            h.send(Event::Backspace);
            h.send(Event::Backspace);
            h.send(Event::Backspace);
            h.send(Event::Backspace);
        }
    }

    #[test]
    fn standard_scoring_is_opt_in() {
        let mut rules = rules(&["geese", "crane"]);
        rules.config = rules.config.with_scoring(crate::core::Scoring::Standard);
        let mut source = FixedWord::new("crane").unwrap();
        let mut phase = Phase::Idle;
        let mut state = GameState::new(&rules.config);

        let mut events = vec![Event::Play];
        events.extend(Event::guess("geese").unwrap());
        for event in events {
            (phase, state) = transition(&rules, &mut source, phase, &state, event);
        }

        let marks: Vec<LetterMark> = state.board().row(0).iter().map(|c| c.mark).collect();
        assert_eq!(
            marks,
            vec![
                LetterMark::Absent,
                LetterMark::Absent,
                LetterMark::Absent,
                LetterMark::Absent,
                LetterMark::Correct
            ]
        );
    }
}
