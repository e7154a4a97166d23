//! Display functions for game state and command results

use super::formatters::{cell_lines, format_keyboard, format_pending_row, format_row, share_grid};
use crate::commands::AutoplayStatistics;
use crate::machine::{GameState, Message, Observation, Phase};
use colored::Colorize;

/// Print the board (with the row being typed) and the keyboard
pub fn print_board(phase: Phase, state: &GameState) {
    println!();
    for (i, row) in state.board().iter_rows().enumerate() {
        if i == state.current_row_index() && phase == Phase::Playing {
            println!("  {}", format_pending_row(state.pending_guess(), state.cols()));
        } else {
            println!("  {}", format_row(row));
        }
    }
    println!();
    for line in format_keyboard(state.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print a one-line summary of the last message
pub fn print_message(state: &GameState) {
    match state.message() {
        Message::None => {}
        Message::Invalid => println!(
            "{}",
            format!("❌ '{}' is not in the word list", state.pending_guess().to_uppercase()).red()
        ),
        Message::Continue => println!(
            "{}",
            format!("{} guesses left", state.remaining_rows()).bright_black()
        ),
        Message::Win => {
            println!(
                "{}",
                format!("🎉 Solved in {}/{}!", state.current_row_index(), state.rows())
                    .green()
                    .bold()
            );
            println!("\n{}\n", share_grid(state));
        }
        Message::Lose => {
            let answer = state.answer().map_or_else(String::new, |w| w.text().to_uppercase());
            println!("{}", format!("❌ Out of guesses. The word was {answer}").red().bold());
            println!("\n{}\n", share_grid(state));
        }
    }
}

/// Print one processed event the way a transition trace reads
pub fn print_observation(observation: &Observation<'_>) {
    let state = observation.state;
    println!("{}", "---".bright_black());
    println!("event:   {}", observation.event.to_string().cyan());
    println!("state:   {}", observation.phase.to_string().yellow());
    println!(
        "context: answer={:?} guess={:?} row={} message={:?}",
        state.answer().map(|w| w.text()).unwrap_or_default(),
        state.pending_guess(),
        state.current_row_index(),
        state.message().to_string(),
    );
    for line in cell_lines(state) {
        println!("  {line}");
    }
}

/// Print the result of an autoplay run
pub fn print_autoplay_result(stats: &AutoplayStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTOPLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Won:              {} ({:.1}%)",
        stats.won.to_string().green(),
        stats.win_rate() * 100.0
    );
    println!("   Lost:             {}", stats.lost.to_string().red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let pct = if stats.total_games == 0 {
            0.0
        } else {
            count as f64 / stats.total_games as f64 * 100.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {guesses}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !stats.lost_words.is_empty() {
        println!("\n😓 {}", "Lost on:".bright_red().bold());
        for word in stats.lost_words.iter().take(10) {
            println!("   • {}", word.to_uppercase());
        }
        if stats.lost_words.len() > 10 {
            println!("   … and {} more", stats.lost_words.len() - 10);
        }
    }
}
