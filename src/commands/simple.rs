//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line typed is sent to the machine as
//! letter events followed by ENTER.

use crate::machine::{Event, EventError, Machine, Phase};
use crate::output::{print_board, print_message};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Quit,
    NewGame,
    Submitted,
    WrongLength { expected: usize, actual: usize },
    BadInput(EventError),
}

/// Apply one line of user input to the machine
///
/// Any letters left over from a rejected guess are erased before the new word
/// is typed.
pub fn apply_line(machine: &mut Machine, line: &str) -> LineOutcome {
    let input = line.trim().to_lowercase();

    match input.as_str() {
        "quit" | "q" | "exit" => return LineOutcome::Quit,
        "new" | "n" => {
            machine.send(Event::Reset);
            machine.send(Event::Play);
            return LineOutcome::NewGame;
        }
        _ => {}
    }

    let events = match Event::letters(&input) {
        Ok(events) => events,
        Err(e) => return LineOutcome::BadInput(e),
    };
    let cols = machine.config().cols;
    if events.len() != cols {
        return LineOutcome::WrongLength {
            expected: cols,
            actual: events.len(),
        };
    }

    let stale = machine.state().pending_guess().len();
    machine.send_all(std::iter::repeat_n(Event::Backspace, stale));
    machine.send_all(events);
    machine.send(Event::Enter);
    LineOutcome::Submitted
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_simple(mut machine: Machine) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries.",
        machine.config().cols,
        machine.config().rows
    );
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    machine.send(Event::Play);
    print_board(machine.phase(), machine.state());

    loop {
        let Some(line) = get_user_input("Guess")? else {
            return Ok(());
        };

        match apply_line(&mut machine, &line) {
            LineOutcome::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineOutcome::NewGame => println!("\n🔄 New game started!"),
            LineOutcome::WrongLength { expected, actual } => {
                println!(
                    "{}",
                    format!("Word must be exactly {expected} letters, got {actual}").red()
                );
                continue;
            }
            LineOutcome::BadInput(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
            LineOutcome::Submitted => {}
        }

        print_board(machine.phase(), machine.state());
        print_message(machine.state());

        if machine.phase() == Phase::GameOver {
            let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                apply_line(&mut machine, "new");
                print_board(machine.phase(), machine.state());
            } else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Read one trimmed line, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Message;

    fn started() -> Machine {
        let mut machine = Machine::reference().unwrap();
        machine.send(Event::Play);
        machine
    }

    #[test]
    fn submitting_a_word() {
        let mut machine = started();
        assert_eq!(apply_line(&mut machine, "Hello\n"), LineOutcome::Submitted);
        assert_eq!(machine.state().message(), Message::Continue);
        assert_eq!(apply_line(&mut machine, "world"), LineOutcome::Submitted);
        assert_eq!(machine.phase(), Phase::GameOver);
    }

    #[test]
    fn rejected_word_is_cleared_before_next() {
        let mut machine = started();
        apply_line(&mut machine, "crane");
        assert_eq!(machine.state().message(), Message::Invalid);
        assert_eq!(machine.state().pending_guess(), "crane");

        apply_line(&mut machine, "world");
        assert_eq!(machine.state().message(), Message::Win);
    }

    #[test]
    fn wrong_length_and_bad_input() {
        let mut machine = started();
        assert_eq!(
            apply_line(&mut machine, "hi"),
            LineOutcome::WrongLength {
                expected: 5,
                actual: 2
            }
        );
        assert!(matches!(
            apply_line(&mut machine, "he11o"),
            LineOutcome::BadInput(EventError::MalformedLetter(_))
        ));
        assert_eq!(machine.state().pending_guess(), "");
    }

    #[test]
    fn commands() {
        let mut machine = started();
        apply_line(&mut machine, "hello");
        assert_eq!(apply_line(&mut machine, "new"), LineOutcome::NewGame);
        assert_eq!(machine.phase(), Phase::Playing);
        assert_eq!(machine.state().current_row_index(), 0);
        assert_eq!(apply_line(&mut machine, "QUIT"), LineOutcome::Quit);
    }
}
