//! Notifications emitted by the engine for renderers

use super::state::GameStatus;
use crate::core::Feedback;

/// Final result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: GameStatus,
    pub secret: String,
    pub attempts: usize,
}

impl Outcome {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }
}

/// State change produced by an engine operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A letter was written to cell `(row, col)`
    LetterTyped {
        row: usize,
        col: usize,
        letter: char,
    },
    /// Cell `(row, col)` was cleared
    LetterErased { row: usize, col: usize },
    /// The pending guess is too short or not in the dictionary.
    /// Transient: nothing in the game state changed.
    InvalidWord,
    /// A guess was accepted and scored on `row`
    RowScored { row: usize, feedback: Feedback },
    /// The game reached a terminal status
    GameOver(Outcome),
}
