//! Simple line-mode game
//!
//! Plays Wordle over plain stdin/stdout without the TUI: one guess per line.

use crate::game::{Event, GuessEngine, MAX_ATTEMPTS, SessionStats};
use crate::output::{write_board, write_outcome, write_stats};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the line-mode game until the player quits or input ends
///
/// Returns the statistics of the session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, W>(
    engine: &mut GuessEngine<'_, R>,
    input: &mut I,
    out: &mut W,
) -> Result<SessionStats>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();

    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║                W O R D L E                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in {MAX_ATTEMPTS} tries.")?;
    writeln!(out, "Commands: 'new' for a new word, 'quit' to exit\n")?;

    loop {
        write_board(out, engine.state())?;

        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", engine.state().row() + 1);
        let Some(line) = read_line(input, out, &prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                engine.restart();
                writeln!(out, "\n🔄 New game started!")?;
                continue;
            }
            _ => {}
        }

        // Start from an empty row, then type the line letter by letter
        while engine.back().is_some() {}
        for ch in line.chars() {
            engine.type_letter(ch);
        }

        let events = if engine.state().input() == line.to_lowercase() {
            engine.submit()
        } else {
            vec![Event::InvalidWord]
        };

        for event in events {
            match event {
                Event::InvalidWord => {
                    writeln!(out, "{}", "❌ Invalid word.".red().bold())?;
                }
                Event::GameOver(outcome) => {
                    stats.record(&outcome);
                    write_board(out, engine.state())?;
                    write_outcome(out, &outcome)?;
                    write_stats(out, &stats)?;

                    let again = read_line(input, out, "\nNew Wordle? (yes/no)")?;
                    if matches!(
                        again.as_deref().map(str::to_lowercase).as_deref(),
                        Some("yes" | "y")
                    ) {
                        engine.restart();
                        writeln!(out, "\n🔄 New game started!")?;
                    } else {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(stats);
                    }
                }
                Event::LetterTyped { .. }
                | Event::LetterErased { .. }
                | Event::RowScored { .. } => {}
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::from_slice;
    use crate::game::GameStatus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        from_slice(&[
            "array", "allot", "crane", "slate", "irate", "arose", "speed", "creep",
        ])
        .unwrap()
    }

    fn play(
        dictionary: &Dictionary,
        secret: &str,
        script: &str,
    ) -> (String, SessionStats, GameStatus) {
        colored::control::set_override(false);
        let mut engine =
            GuessEngine::with_secret(dictionary, StdRng::seed_from_u64(3), secret).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();

        let stats = run_simple(&mut engine, &mut input, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats, engine.status())
    }

    #[test]
    fn winning_game() {
        let dictionary = dictionary();
        let (out, stats, status) = play(&dictionary, "array", "crane\narray\nno\n");

        assert!(out.contains("Congratulations! You guessed 'ARRAY' in 2 tries."));
        assert_eq!(status, GameStatus::Won);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn invalid_words_are_reported_without_using_a_turn() {
        let dictionary = dictionary();
        let (out, stats, status) = play(&dictionary, "array", "zzzzz\ncranes\ncr4ne\nquit\n");

        assert_eq!(out.matches("Invalid word.").count(), 3);
        assert!(out.contains("Guess 1/6"));
        assert!(!out.contains("Guess 2/6"));
        assert_eq!(stats.games_played, 0);
        assert_eq!(status, GameStatus::InProgress);
    }

    #[test]
    fn losing_game_reveals_word() {
        let dictionary = dictionary();
        let script = "crane\nslate\nirate\narose\nspeed\ncreep\nn\n";
        let (out, stats, status) = play(&dictionary, "allot", script);

        assert!(out.contains("Sorry, you ran out of tries. The word was 'ALLOT'."));
        assert_eq!(status, GameStatus::Lost);
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn play_again_restarts() {
        let dictionary = dictionary();
        let (out, stats, status) = play(&dictionary, "array", "array\nyes\n");

        assert!(out.contains("New game started!"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(status, GameStatus::InProgress);
    }

    #[test]
    fn end_of_input_stops() {
        let dictionary = dictionary();
        let (out, stats, _) = play(&dictionary, "array", "");

        assert!(out.contains("Thanks for playing!"));
        assert_eq!(stats, SessionStats::default());
    }
}
