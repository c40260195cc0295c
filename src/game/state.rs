//! Game state owned by the engine and read by renderers

use crate::core::{Feedback, LetterHints, WORD_LENGTH, Word};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Mutable state of one game
///
/// Fields are only written by [`super::GuessEngine`]; renderers get a shared
/// reference through [`super::GuessEngine::state`].
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) input: String,
    pub(super) row: usize,
    pub(super) history: Vec<GuessRecord>,
    pub(super) status: GameStatus,
    pub(super) hints: LetterHints,
}

impl GameState {
    pub(super) fn new() -> Self {
        Self {
            input: String::with_capacity(WORD_LENGTH),
            row: 0,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
            hints: LetterHints::new(),
        }
    }

    /// Letters typed on the current row, lowercase
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Index of the row being typed (0-5)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Submitted guesses in order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Best known mark per letter, for keyboard coloring
    #[must_use]
    pub const fn hints(&self) -> &LetterHints {
        &self.hints
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Letter shown in the cell at `(row, col)`, if any
    ///
    /// Submitted rows come from history; the active row shows the pending
    /// input while the game is in progress.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if let Some(record) = self.history.get(row) {
            return record.word.chars().get(col).map(|&b| char::from(b));
        }
        if row == self.row && !self.status.is_over() {
            return self.input.chars().nth(col);
        }
        None
    }
}
