//! Game state machine
//!
//! Phases, events, the pure transition function and a small interpreter that
//! feeds events through it and notifies subscribers.

mod event;
mod service;
mod state;
mod transition;

pub use event::{Event, EventError};
pub use service::{Machine, Observation, SubscriptionId};
pub use state::{GameState, Message, Phase};
pub use transition::{Rules, transition};
