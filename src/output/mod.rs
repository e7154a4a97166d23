//! Terminal output formatting
//!
//! Colored boards and keyboards, transition traces and command results.

pub mod display;
pub mod formatters;

pub use display::{print_autoplay_result, print_board, print_message, print_observation};
