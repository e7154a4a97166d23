//! Wordle Machine - CLI
//!
//! Play Wordle in a TUI or on plain lines, replay event scripts, or let a naive
//! player run through the whole answer list.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_machine::{
    commands::{DEFAULT_SCRIPT, parse_script, run_autoplay, run_script, run_simple},
    config::{ConfigError, DEFAULT_COLS, DEFAULT_ROWS, GameConfig},
    core::{Scoring, Word},
    machine::{Machine, Phase},
    output::{print_autoplay_result, print_board, print_message, print_observation},
    wordlists::{
        ALLOWED, ANSWERS, Dictionary, FixedWord, REFERENCE, REFERENCE_ANSWER, RandomWord,
        WordSource,
        loader::{load_from_file, with_width, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_machine",
    about = "Wordle as an explicit state machine, with TUI, line and scripted front ends",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses per round
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Letters per word
    #[arg(long, global = true, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Wordlist: 'all' (default), 'reference' (hello/world only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Fix the answer of every round
    #[arg(short, long, global = true)]
    answer: Option<String>,

    /// Seed for the random answer source
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Scoring rule: membership (default) or standard
    #[arg(long, global = true, default_value = "membership")]
    scoring: String,

    /// Log filter, overrides RUST_LOG (e.g. 'debug', 'wordle_machine=trace')
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Replay an event script and print every transition
    Script {
        /// Script file; the reference run is used when omitted
        file: Option<PathBuf>,
    },

    /// Play every answer with a naive player and report statistics
    Autoplay {
        /// Limit number of answers to play
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Word lists selected by `--wordlist`
///
/// Returns (`dictionary`, `answers`)
/// - "all": every embedded allowed word as guesses, embedded answers as answers
/// - "reference": `hello` and `world` as guesses, `world` as the answer
/// - "<path>": one word per line, used for both
fn load_wordlists(wordlist_mode: &str, cols: usize) -> Result<(Dictionary, Vec<Word>)> {
    let (dictionary, answers) = match wordlist_mode {
        "all" => (
            Dictionary::from_words(&words_from_slice(ALLOWED), cols),
            words_from_slice(ANSWERS),
        ),
        "reference" => (
            Dictionary::from_words(&words_from_slice(REFERENCE), cols),
            words_from_slice(&[REFERENCE_ANSWER]),
        ),
        path => {
            let words = load_from_file(path).with_context(|| format!("reading wordlist {path}"))?;
            (Dictionary::from_words(&words, cols), words)
        }
    };

    if dictionary.is_empty() {
        bail!(ConfigError::EmptyWordList);
    }
    Ok((dictionary, with_width(answers, cols)))
}

fn init_logging(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let scoring =
        Scoring::from_name(&cli.scoring).ok_or(ConfigError::UnknownScoring(cli.scoring.clone()))?;
    let config = GameConfig::default()
        .with_rows(cli.rows)
        .with_cols(cli.cols)
        .with_scoring(scoring);
    config.validate()?;

    let (dictionary, answers) = load_wordlists(&cli.wordlist, config.cols)?;
    let dictionary = Arc::new(dictionary);
    info!(
        words = dictionary.len(),
        answers = answers.len(),
        rows = config.rows,
        cols = config.cols,
        ?scoring,
        "loaded wordlists"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Autoplay { limit } => {
            let stats = run_autoplay(config, dictionary, &answers, &answers, limit, true)?;
            print_autoplay_result(&stats);
            Ok(())
        }
        Commands::Script { file } => {
            // Scripts are written against a known answer
            let answer = cli.answer.as_deref().unwrap_or(REFERENCE_ANSWER);
            let machine = Machine::new(config, dictionary, FixedWord::new(answer)?)?;
            run_script_command(machine, file)
        }
        Commands::Simple => {
            let source = answer_source(cli.answer.as_deref(), cli.seed, answers)?;
            run_simple(Machine::new(config, dictionary, source)?)
        }
        Commands::Play => {
            use wordle_machine::interactive::{App, run_tui};

            let source = answer_source(cli.answer.as_deref(), cli.seed, answers)?;
            run_tui(App::new(Machine::new(config, dictionary, source)?))
        }
    }
}

/// `--answer` wins over `--seed`; without either the OS seeds the choice
fn answer_source(
    answer: Option<&str>,
    seed: Option<u64>,
    answers: Vec<Word>,
) -> Result<Box<dyn WordSource>, ConfigError> {
    let source: Box<dyn WordSource> = match (answer, seed) {
        (Some(word), _) => Box::new(FixedWord::new(word)?),
        (None, Some(seed)) => Box::new(RandomWord::seeded(answers, seed)?),
        (None, None) => Box::new(RandomWord::new(answers)?),
    };
    Ok(source)
}

fn run_script_command(mut machine: Machine, file: Option<PathBuf>) -> Result<()> {
    let text = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => DEFAULT_SCRIPT.to_string(),
    };
    let events = parse_script(&text)?;

    machine.subscribe(|observation| print_observation(observation));
    let report = run_script(&mut machine, &events);

    if let Some(phase) = report.final_phase()
        && phase != Phase::Idle
    {
        print_board(phase, machine.state());
        print_message(machine.state());
    }
    println!(
        "\n{} events, outcomes: {}",
        report.steps.len(),
        report
            .outcomes()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}
