//! Command implementations

pub mod autoplay;
pub mod script;
pub mod simple;

pub use autoplay::{AutoplayStatistics, GameResult, play_one, run_autoplay};
pub use script::{DEFAULT_SCRIPT, ScriptReport, parse_script, run_script};
pub use simple::run_simple;
