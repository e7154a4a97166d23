//! Wordle Machine
//!
//! A Wordle game modeled as an explicit finite state machine: a pure
//! transition function over `(phase, state, event)`, a small interpreter that
//! runs it and notifies subscribers, and terminal front ends on top.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_machine::machine::{Event, Machine, Message, Phase};
//!
//! let mut machine = Machine::reference().unwrap();
//! machine.send(Event::Play);
//! machine.send_all(Event::guess("hello").unwrap());
//! assert_eq!(machine.state().message(), Message::Continue);
//!
//! machine.send_all(Event::guess("world").unwrap());
//! assert_eq!(machine.phase(), Phase::GameOver);
//! assert_eq!(machine.state().message(), Message::Win);
//! ```

// Board shape and scoring rule
pub mod config;

// Core domain types
pub mod core;

// Phases, events and the transition function
pub mod machine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
