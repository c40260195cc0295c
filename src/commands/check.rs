//! Guess checking command
//!
//! Scores one guess against a chosen secret without playing a game.

use crate::core::{Feedback, Word, WordError, compute_feedback};
use crate::dictionary::Dictionary;
use std::fmt;

/// Error checking a guess: one of the two words is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    InvalidGuess { entry: String, reason: WordError },
    InvalidSecret { entry: String, reason: WordError },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess { entry, reason } => {
                write!(f, "Invalid guess '{entry}': {reason}")
            }
            Self::InvalidSecret { entry, reason } => {
                write!(f, "Invalid secret '{entry}': {reason}")
            }
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess { reason, .. } | Self::InvalidSecret { reason, .. } => Some(reason),
        }
    }
}

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
    pub guess_in_dictionary: bool,
}

/// Score `guess` against `secret`
///
/// The guess does not have to be in the dictionary; the result records
/// whether it is.
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn check_guess(
    guess: &str,
    secret: &str,
    dictionary: &Dictionary,
) -> Result<CheckResult, CheckError> {
    let guess = Word::new(guess).map_err(|reason| CheckError::InvalidGuess {
        entry: guess.to_string(),
        reason,
    })?;
    let secret = Word::new(secret).map_err(|reason| CheckError::InvalidSecret {
        entry: secret.to_string(),
        reason,
    })?;

    let feedback = compute_feedback(&guess, &secret);
    let guess_in_dictionary = dictionary.contains(&guess);

    Ok(CheckResult {
        guess,
        secret,
        feedback,
        guess_in_dictionary,
    })
}
