//! Autoplay - play every answer through real machines
//!
//! A naive player guesses the first candidate that agrees with all feedback
//! seen so far. Each answer gets its own machine; games run in parallel.

use crate::config::{ConfigError, GameConfig};
use crate::core::{Pattern, Word};
use crate::machine::{Event, Machine, Message, Phase};
use crate::wordlists::{Dictionary, FixedWord};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result from playing a single answer
#[derive(Debug, Clone)]
pub struct GameResult {
    pub answer: String,
    pub guesses: Vec<String>,
    pub won: bool,
}

/// Statistics over all played answers
#[derive(Debug, Clone)]
pub struct AutoplayStatistics {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    /// Index `n` counts games won with exactly `n` guesses
    pub guess_distribution: Vec<usize>,
    pub average_guesses: f64,
    pub total_time: Duration,
    pub lost_words: Vec<String>,
}

impl AutoplayStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.won as f64 / self.total_games as f64
        }
    }

    fn from_results(results: &[GameResult], rows: usize, total_time: Duration) -> Self {
        let mut guess_distribution = vec![0; rows + 1];
        let mut lost_words = Vec::new();
        let mut winning_guesses = 0;

        for result in results {
            if result.won {
                if let Some(slot) = guess_distribution.get_mut(result.guesses.len()) {
                    *slot += 1;
                }
                winning_guesses += result.guesses.len();
            } else {
                lost_words.push(result.answer.clone());
            }
        }

        let won = results.len() - lost_words.len();
        Self {
            total_games: results.len(),
            won,
            lost: lost_words.len(),
            guess_distribution,
            average_guesses: if won == 0 {
                0.0
            } else {
                winning_guesses as f64 / won as f64
            },
            total_time,
            lost_words,
        }
    }
}

/// Play one round against `answer`
///
/// `candidates` is the player's idea of which words could be the answer, in
/// the order it tries them. Candidates that don't fit the board are ignored.
///
/// # Errors
/// Returns a `ConfigError` if a machine cannot be built for `answer`.
pub fn play_one(
    config: GameConfig,
    dictionary: Arc<Dictionary>,
    candidates: &[Word],
    answer: &Word,
) -> Result<GameResult, ConfigError> {
    let mut machine = Machine::new(config, dictionary, FixedWord::new(answer.text())?)?;
    machine.send(Event::Play);

    let mut history: Vec<(Word, Pattern)> = Vec::new();
    let mut rejected: Vec<&Word> = Vec::new();

    while machine.phase() == Phase::Playing {
        let Some(guess) = candidates.iter().find(|c| {
            c.len() == config.cols
                && !rejected.contains(c)
                && history
                    .iter()
                    .all(|(g, p)| config.scoring.score(g, c) == *p)
        }) else {
            debug!(answer = %answer, "no candidates left");
            break;
        };

        let stale = machine.state().pending_guess().len();
        machine.send_all(std::iter::repeat_n(Event::Backspace, stale));
        machine.send_all(guess.chars().iter().map(|&b| Event::Letter(char::from(b))));

        let row = machine.state().current_row_index();
        let (_, state) = machine.send(Event::Enter);

        // only a committed row tells us anything
        if state.current_row_index() != row + 1 {
            rejected.push(guess);
            continue;
        }

        let pattern = Pattern::new(state.board().row(row).iter().map(|c| c.mark).collect());
        history.push((guess.clone(), pattern));
    }

    let state = machine.state();
    Ok(GameResult {
        answer: answer.text().to_string(),
        guesses: history.iter().map(|(g, _)| g.text().to_string()).collect(),
        won: state.message() == Message::Win,
    })
}

/// Play every answer (or the first `limit`) in parallel
///
/// # Errors
/// Returns the first `ConfigError` hit while building a machine.
pub fn run_autoplay(
    config: GameConfig,
    dictionary: Arc<Dictionary>,
    candidates: &[Word],
    answers: &[Word],
    limit: Option<usize>,
    show_progress: bool,
) -> Result<AutoplayStatistics, ConfigError> {
    let answers = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];

    let pb = if show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results = answers
        .par_iter()
        .map(|answer| {
            let result = play_one(config, Arc::clone(&dictionary), candidates, answer);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    Ok(AutoplayStatistics::from_results(
        &results,
        config.rows,
        start.elapsed(),
    ))
}
