//! Scripted event replay
//!
//! Feeds a fixed event sequence into a machine and records what happened after
//! every event. The default script starts a round, submits `hello`, then
//! `world`, then resets.

use crate::machine::{Event, EventError, Machine, Message, Phase};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The reference run
pub const DEFAULT_SCRIPT: &str = "play h e l l o enter w o r l d enter reset";

/// A token in a script that is not an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub token: String,
    pub source: EventError,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: '{}': {}", self.line, self.token, self.source)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Parse a script into events
///
/// Tokens are separated by whitespace or commas. `#` starts a comment that
/// runs to the end of the line.
///
/// # Errors
/// Returns the first token that does not parse as an [`Event`].
pub fn parse_script(text: &str) -> Result<Vec<Event>, ScriptError> {
    let mut events = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let code = line.split('#').next().unwrap_or_default();
        for token in code
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let event = token.parse::<Event>().map_err(|source| ScriptError {
                line: index + 1,
                token: token.to_string(),
                source,
            })?;
            events.push(event);
        }
    }
    Ok(events)
}

/// State of the machine after one scripted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub event: Event,
    pub phase: Phase,
    pub message: Message,
    pub pending_guess: String,
    pub row: usize,
}

/// Everything a script run produced
#[derive(Debug, Clone, Default)]
pub struct ScriptReport {
    pub steps: Vec<ScriptStep>,
}

impl ScriptReport {
    #[must_use]
    pub fn final_phase(&self) -> Option<Phase> {
        self.steps.last().map(|s| s.phase)
    }

    /// Messages in the order they first appeared after a submitted guess
    #[must_use]
    pub fn outcomes(&self) -> Vec<Message> {
        self.steps
            .iter()
            .filter(|s| s.event == Event::Enter && s.message != Message::None)
            .map(|s| s.message)
            .collect()
    }
}

/// Send every event to `machine`, recording the state after each one
pub fn run_script(machine: &mut Machine, events: &[Event]) -> ScriptReport {
    let steps: Rc<RefCell<Vec<ScriptStep>>> = Rc::default();
    let sink = Rc::clone(&steps);
    let subscription = machine.subscribe(move |obs| {
        sink.borrow_mut().push(ScriptStep {
            event: obs.event,
            phase: obs.phase,
            message: obs.state.message(),
            pending_guess: obs.state.pending_guess().to_string(),
            row: obs.state.current_row_index(),
        });
    });

    machine.send_all(events.iter().copied());
    machine.unsubscribe(subscription);

    let steps = steps.take();
    ScriptReport { steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_script_parses() {
        let events = parse_script(DEFAULT_SCRIPT).unwrap();
        assert_eq!(events.len(), 14);
        assert_eq!(events[0], Event::Play);
        assert_eq!(events[6], Event::Enter);
        assert_eq!(events[13], Event::Reset);
    }

    #[test]
    fn comments_commas_and_lines() {
        let events = parse_script("play # start\nh,e, letter:l\n\n# nothing\nbs").unwrap();
        assert_eq!(
            events,
            vec![
                Event::Play,
                Event::Letter('h'),
                Event::Letter('e'),
                Event::Letter('l'),
                Event::Backspace
            ]
        );
    }

    #[test]
    fn bad_token_reports_line() {
        let err = parse_script("play\nh e letter:xy").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.token, "letter:xy");
        assert!(matches!(err.source, EventError::MalformedLetter(_)));
    }

    #[test]
    fn reference_script_wins_then_resets() {
        let mut machine = Machine::reference().unwrap();
        let report = run_script(&mut machine, &parse_script(DEFAULT_SCRIPT).unwrap());

        assert_eq!(report.steps.len(), 14);
        assert_eq!(report.outcomes(), vec![Message::Continue, Message::Win]);
        assert_eq!(report.steps[12].phase, Phase::GameOver);
        assert_eq!(report.final_phase(), Some(Phase::Idle));
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn invalid_guess_shows_in_report() {
        let mut machine = Machine::reference().unwrap();
        let report = run_script(&mut machine, &parse_script("play c r a n e enter").unwrap());

        let last = report.steps.last().unwrap();
        assert_eq!(last.phase, Phase::Playing);
        assert_eq!(last.message, Message::Invalid);
        assert_eq!(last.pending_guess, "crane");
        assert_eq!(last.row, 0);
    }
}
