//! Guess scoring
//!
//! A [`Feedback`] holds one [`Mark`] per letter of a guess:
//! - `Correct`: right letter, right position (green)
//! - `Present`: letter is in the secret, wrong position (yellow)
//! - `Absent`: letter is not in the secret, or all its occurrences are used up (gray)

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Verdict for a single letter of a guess
///
/// Ordered by priority: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    /// Letter not in the secret word (gray)
    Absent,
    /// Letter in the secret word at another position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

impl Mark {
    /// Emoji tile for this mark
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Build feedback from explicit marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Score `guess` against `secret`
    ///
    /// Duplicate letters are handled the Wordle way: a letter is marked
    /// `Correct` or `Present` at most as many times as it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and count them as used
    /// 2. Second pass, left to right: mark a remaining letter `Present` while
    ///    unused occurrences of it remain in the secret, `Absent` otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let secret = Word::new("allot").unwrap();
    /// let feedback = Feedback::compute(&guess, &secret);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Present, Mark::Present, Mark::Correct, Mark::Absent, Mark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut scored = [false; WORD_LENGTH];
        let mut used = [0u8; ALPHABET_SIZE];

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                marks[i] = Mark::Correct;
                scored[i] = true;
                used[letter_index(g)] += 1;
            }
        }

        // Second pass: misplaced letters, consumed left to right
        for (i, &g) in guess.chars().iter().enumerate() {
            if scored[i] {
                continue;
            }
            let slot = &mut used[letter_index(g)];
            if *slot < secret.count_of(g) {
                marks[i] = Mark::Present;
                *slot += 1;
            }
        }

        Self(marks)
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

/// Pure scoring entry point, see [`Feedback::compute`]
#[must_use]
pub fn compute_feedback(guess: &Word, secret: &Word) -> Feedback {
    Feedback::compute(guess, secret)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜/⬛ for absent
impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            let mark = match ch {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '⬜' | '⬛' => Mark::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
            if len == WORD_LENGTH {
                return Err(format!("Invalid feedback string: {s}"));
            }
            marks[len] = mark;
            len += 1;
        }

        if len == WORD_LENGTH {
            Ok(Self(marks))
        } else {
            Err(format!("Invalid feedback string: {s}"))
        }
    }
}
