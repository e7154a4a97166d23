//! Embedded word lists
//!
//! `ANSWERS` and `ALLOWED` are generated by `build.rs` from `data/`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// The two-word list of the reference game: `hello` is a valid guess, `world`
/// is the answer
pub const REFERENCE: &[&str] = &["hello", "world"];

/// Answer drawn by the reference game
pub const REFERENCE_ANSWER: &str = "world";
