//! Core domain types for Wordle
//!
//! Words, per-letter feedback and keyboard hints. Everything here is pure:
//! no I/O, no randomness, no game state.

mod feedback;
mod hints;
mod word;

pub use feedback::{Feedback, Mark, compute_feedback};
pub use hints::LetterHints;
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};
