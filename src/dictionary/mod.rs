//! Dictionary of playable words
//!
//! The same dictionary supplies the secret word and validates guesses. It is
//! built once at startup and never mutated afterwards.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{WORD_LENGTH, Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error raised while building a dictionary
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list could not be read
    Io { path: PathBuf, source: io::Error },
    /// A line is not a valid 5-letter word
    Malformed {
        line: usize,
        entry: String,
        reason: WordError,
    },
    /// The word list holds no words
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Malformed {
                line,
                entry,
                reason,
            } => write!(f, "Line {line}: invalid word '{entry}': {reason}"),
            Self::Empty => write!(f, "Word list contains no words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { reason, .. } => Some(reason),
            Self::Empty => None,
        }
    }
}

/// Immutable set of valid 5-letter words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicate entries
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(*word.chars()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Fails only if the embedded list is malformed.
    pub fn embedded() -> Result<Self, DictionaryError> {
        loader::from_slice(WORDS)
    }

    /// Check whether `word` is playable
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Pick a word uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty dictionary cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
