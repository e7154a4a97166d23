//! External events and their textual form

use std::fmt;
use std::str::FromStr;

/// Events a driver can send to the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Play,
    Letter(char),
    Backspace,
    Enter,
    Reset,
}

/// A textual event token that could not be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Letter payload that is not exactly one ASCII letter
    MalformedLetter(String),
    UnknownEvent(String),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLetter(raw) => {
                write!(f, "Letter must be a single ASCII letter, got '{raw}'")
            }
            Self::UnknownEvent(raw) => write!(f, "Unknown event '{raw}'"),
        }
    }
}

impl std::error::Error for EventError {}

impl Event {
    /// Build a `Letter` event from raw text
    ///
    /// # Errors
    /// Returns `EventError::MalformedLetter` unless `raw` is exactly one ASCII
    /// letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_machine::machine::Event;
    ///
    /// assert_eq!(Event::letter("H"), Ok(Event::Letter('h')));
    /// assert!(Event::letter("he").is_err());
    /// assert!(Event::letter("7").is_err());
    /// ```
    pub fn letter(raw: &str) -> Result<Self, EventError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self::Letter(c.to_ascii_lowercase())),
            _ => Err(EventError::MalformedLetter(raw.to_string())),
        }
    }

    /// Events that type `word` letter by letter
    ///
    /// # Errors
    /// Fails on the first character that is not an ASCII letter.
    pub fn letters(word: &str) -> Result<Vec<Self>, EventError> {
        word.chars()
            .map(|c| Self::letter(c.encode_utf8(&mut [0; 4])))
            .collect()
    }

    /// Events that type `word` and submit it
    ///
    /// # Errors
    /// Same as [`Event::letters`].
    pub fn guess(word: &str) -> Result<Vec<Self>, EventError> {
        let mut events = Self::letters(word)?;
        events.push(Self::Enter);
        Ok(events)
    }
}

impl FromStr for Event {
    type Err = EventError;

    /// Parse tokens such as `play`, `h`, `letter:h`, `backspace`, `enter`, `reset`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let lower = token.to_ascii_lowercase();

        if let Some(payload) = lower.strip_prefix("letter:") {
            return Self::letter(payload);
        }

        match lower.as_str() {
            "play" => Ok(Self::Play),
            "enter" | "submit" => Ok(Self::Enter),
            "backspace" | "bs" | "back" => Ok(Self::Backspace),
            "reset" => Ok(Self::Reset),
            _ if token.chars().count() == 1 => Self::letter(token),
            _ => Err(EventError::UnknownEvent(token.to_string())),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Play => write!(f, "PLAY"),
            Self::Letter(c) => write!(f, "LETTER({c})"),
            Self::Backspace => write!(f, "BACKSPACE"),
            Self::Enter => write!(f, "ENTER"),
            Self::Reset => write!(f, "RESET"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords() {
        assert_eq!("PLAY".parse::<Event>(), Ok(Event::Play));
        assert_eq!(" enter ".parse::<Event>(), Ok(Event::Enter));
        assert_eq!("bs".parse::<Event>(), Ok(Event::Backspace));
        assert_eq!("Reset".parse::<Event>(), Ok(Event::Reset));
    }

    #[test]
    fn parse_letters() {
        assert_eq!("h".parse::<Event>(), Ok(Event::Letter('h')));
        assert_eq!("W".parse::<Event>(), Ok(Event::Letter('w')));
        assert_eq!("letter:q".parse::<Event>(), Ok(Event::Letter('q')));
        assert_eq!("LETTER:Q".parse::<Event>(), Ok(Event::Letter('q')));
    }

    #[test]
    fn malformed_letters_rejected() {
        assert_eq!(
            "letter:ab".parse::<Event>(),
            Err(EventError::MalformedLetter("ab".to_string()))
        );
        assert_eq!(
            "letter:".parse::<Event>(),
            Err(EventError::MalformedLetter(String::new()))
        );
        assert_eq!(
            "5".parse::<Event>(),
            Err(EventError::MalformedLetter("5".to_string()))
        );
        assert!(matches!(
            "é".parse::<Event>(),
            Err(EventError::MalformedLetter(_))
        ));
    }

    #[test]
    fn unknown_token() {
        assert_eq!(
            "jump".parse::<Event>(),
            Err(EventError::UnknownEvent("jump".to_string()))
        );
    }

    #[test]
    fn guess_expands_to_letters_and_enter() {
        let events = Event::guess("World").unwrap();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0], Event::Letter('w'));
        assert_eq!(events[5], Event::Enter);
        assert!(Event::guess("w0rld").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Event::Letter('x').to_string(), "LETTER(x)");
        assert_eq!(Event::Backspace.to_string(), "BACKSPACE");
    }
}
