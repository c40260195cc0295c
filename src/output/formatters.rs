//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterHints, Mark, Word};
use colored::{ColoredString, Colorize};

/// Tile colors as RGB
pub const GREEN: (u8, u8, u8) = (0x6a, 0xaa, 0x64);
pub const YELLOW: (u8, u8, u8) = (0xc9, 0xb4, 0x58);
pub const GRAY: (u8, u8, u8) = (0x7c, 0x7c, 0x7c);
pub const KEY: (u8, u8, u8) = (0xd3, 0xd6, 0xda);

/// On-screen keyboard rows
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Background color for a mark
#[must_use]
pub const fn mark_rgb(mark: Mark) -> (u8, u8, u8) {
    match mark {
        Mark::Correct => GREEN,
        Mark::Present => YELLOW,
        Mark::Absent => GRAY,
    }
}

fn tile(letter: char, rgb: (u8, u8, u8)) -> ColoredString {
    let (r, g, b) = rgb;
    format!(" {} ", letter.to_ascii_uppercase())
        .bold()
        .white()
        .on_truecolor(r, g, b)
}

/// Render a scored guess as colored letter tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| tile(char::from(letter), mark_rgb(mark)).to_string())
        .collect()
}

/// Render the keyboard with hint colors, one string per row
#[must_use]
pub fn colored_keyboard(hints: &LetterHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|letter| match hints.get(letter) {
                    Some(mark) => tile(letter, mark_rgb(mark)).to_string(),
                    None => {
                        let (r, g, b) = KEY;
                        format!(" {} ", letter.to_ascii_uppercase())
                            .bold()
                            .black()
                            .on_truecolor(r, g, b)
                            .to_string()
                    }
                })
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Tally of a scored guess, e.g. "1 correct, 2 present, 2 absent"
#[must_use]
pub fn feedback_summary(feedback: &Feedback) -> String {
    format!(
        "{} correct, {} present, {} absent",
        feedback.count(Mark::Correct),
        feedback.count(Mark::Present),
        feedback.count(Mark::Absent)
    )
}

/// End-of-game message
#[must_use]
pub fn outcome_message(secret: &str, attempts: usize, won: bool) -> String {
    if won {
        format!(
            "Congratulations! You guessed '{}' in {attempts} tries.",
            secret.to_uppercase()
        )
    } else {
        format!(
            "Sorry, you ran out of tries. The word was '{}'.",
            secret.to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_colors() {
        assert_eq!(mark_rgb(Mark::Correct), GREEN);
        assert_eq!(mark_rgb(Mark::Present), YELLOW);
        assert_eq!(mark_rgb(Mark::Absent), GRAY);
    }

    #[test]
    fn colored_guess_contains_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let text = colored_guess(&word, &Feedback::PERFECT);
        assert_eq!(text, " C  R  A  N  E ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let rows = colored_keyboard(&LetterHints::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[2].starts_with("     Z "));
    }

    #[test]
    fn summary_counts_each_mark() {
        let feedback: Feedback = "YYG--".parse().unwrap();
        assert_eq!(
            feedback_summary(&feedback),
            "1 correct, 2 present, 2 absent"
        );
        assert_eq!(
            feedback_summary(&Feedback::PERFECT),
            "5 correct, 0 present, 0 absent"
        );
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            outcome_message("array", 1, true),
            "Congratulations! You guessed 'ARRAY' in 1 tries."
        );
        assert_eq!(
            outcome_message("allot", 6, false),
            "Sorry, you ran out of tries. The word was 'ALLOT'."
        );
    }
}
