//! Display functions for line-mode output

use super::formatters::{colored_guess, colored_keyboard, feedback_summary, outcome_message};
use crate::commands::CheckResult;
use crate::game::{GameState, MAX_ATTEMPTS, Outcome, SessionStats};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_guess(&result.guess, &result.feedback));
    println!("  {}", result.feedback.to_emoji());
    println!("  {}", feedback_summary(&result.feedback).dimmed());

    if !result.guess_in_dictionary {
        let note = "Note: the guess is not in the dictionary and would be rejected in play.";
        println!("\n{}", note.yellow());
    }
    if result.feedback.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Write the guessed rows followed by the hint keyboard
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_board<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    for (i, record) in state.history().iter().enumerate() {
        writeln!(
            out,
            "  {}. {}  {}",
            i + 1,
            colored_guess(&record.word, &record.feedback),
            record.feedback.to_emoji()
        )?;
    }
    for i in state.attempts()..MAX_ATTEMPTS {
        writeln!(out, "  {}. {}", i + 1, " _ ".repeat(5).bright_black())?;
    }

    writeln!(out)?;
    for row in colored_keyboard(state.hints()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)
}

/// Write the end-of-game panel
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    let message = outcome_message(&outcome.secret, outcome.attempts, outcome.is_win());
    let message = if outcome.is_win() {
        message.green().bold()
    } else {
        message.red().bold()
    };
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "  {message}")?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

/// Write session statistics
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_stats<W: Write>(out: &mut W, stats: &SessionStats) -> io::Result<()> {
    writeln!(
        out,
        "\n📊 Played: {} | Win rate: {:.0}% | Streak: {} (max {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;

    let counts = &stats.guess_distribution;
    let peak = counts.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in counts.iter().enumerate() {
        let width = count * 30 / peak;
        writeln!(
            out,
            "   {}: {}{} {count}",
            i + 1,
            "█".repeat(width).green(),
            "░".repeat(30 - width).bright_black()
        )?;
    }
    Ok(())
}
