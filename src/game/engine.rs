//! Guess engine: the game's state machine
//!
//! Renderers drive the engine through three operations ([`GuessEngine::type_letter`],
//! [`GuessEngine::back`], [`GuessEngine::submit`]) and redraw from the returned
//! [`Event`]s or from [`GuessEngine::state`].

use super::event::{Event, Outcome};
use super::state::{GameState, GameStatus, GuessRecord, MAX_ATTEMPTS};
use crate::core::{WORD_LENGTH, Word, WordError, compute_feedback};
use crate::dictionary::Dictionary;
use rand::Rng;
use rand::rngs::StdRng;
use std::fmt;

/// Error creating an engine with a fixed secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidSecret(WordError),
    SecretNotInDictionary(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSecret(err) => write!(f, "Invalid secret word: {err}"),
            Self::SecretNotInDictionary(word) => {
                write!(f, "Secret word '{word}' is not in the dictionary")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Single-player Wordle game
///
/// Owns the secret word and all game state. The dictionary is borrowed and
/// shared across restarts; the random source picks a new secret each game.
pub struct GuessEngine<'a, R: Rng = StdRng> {
    dictionary: &'a Dictionary,
    rng: R,
    secret: Word,
    state: GameState,
}

impl<'a, R: Rng> GuessEngine<'a, R> {
    /// Start a game with a secret drawn from `dictionary`
    pub fn new(dictionary: &'a Dictionary, mut rng: R) -> Self {
        let secret = dictionary.random_word(&mut rng).clone();
        log::debug!("new game from {} words", dictionary.len());
        log::trace!("secret word: {secret}");

        Self {
            dictionary,
            rng,
            secret,
            state: GameState::new(),
        }
    }

    /// Start a game with a fixed secret word
    ///
    /// Later restarts draw from `rng` as usual.
    ///
    /// # Errors
    ///
    /// Returns an error if `secret` is not a valid word of `dictionary`.
    pub fn with_secret(
        dictionary: &'a Dictionary,
        rng: R,
        secret: &str,
    ) -> Result<Self, EngineError> {
        let secret = Word::new(secret).map_err(EngineError::InvalidSecret)?;
        if !dictionary.contains(&secret) {
            return Err(EngineError::SecretNotInDictionary(secret.text().to_string()));
        }

        Ok(Self {
            dictionary,
            rng,
            secret,
            state: GameState::new(),
        })
    }

    /// Discard the current game and start a fresh one
    pub fn restart(&mut self) {
        self.secret = self.dictionary.random_word(&mut self.rng).clone();
        self.state = GameState::new();
        log::debug!("game restarted");
        log::trace!("secret word: {}", self.secret);
    }

    /// Read-only view of the game
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    /// The secret word, only once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.state.status.is_over().then_some(&self.secret)
    }

    /// Final result, `None` while the game is in progress
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.status.is_over().then(|| Outcome {
            status: self.state.status,
            secret: self.secret.text().to_string(),
            attempts: self.state.attempts(),
        })
    }

    /// Append a letter to the current row
    ///
    /// Ignored when the game is over, the row is full, or `ch` is not an
    /// ASCII letter.
    pub fn type_letter(&mut self, ch: char) -> Option<Event> {
        if self.state.status.is_over()
            || self.state.input.len() >= WORD_LENGTH
            || !ch.is_ascii_alphabetic()
        {
            return None;
        }

        let letter = ch.to_ascii_lowercase();
        self.state.input.push(letter);
        log::trace!("typed '{letter}' -> {:?}", self.state.input);

        Some(Event::LetterTyped {
            row: self.state.row,
            col: self.state.input.len() - 1,
            letter,
        })
    }

    /// Remove the last letter of the current row
    ///
    /// Ignored on an empty row or a finished game.
    pub fn back(&mut self) -> Option<Event> {
        if self.state.status.is_over() {
            return None;
        }

        self.state.input.pop()?;
        log::trace!("erased -> {:?}", self.state.input);

        Some(Event::LetterErased {
            row: self.state.row,
            col: self.state.input.len(),
        })
    }

    /// Submit the current row as a guess
    ///
    /// Returns no events if the game is over. Returns only
    /// [`Event::InvalidWord`] if the row is incomplete or not a dictionary
    /// word; the state is left untouched in that case. Otherwise returns
    /// [`Event::RowScored`], followed by [`Event::GameOver`] when the guess
    /// ends the game.
    pub fn submit(&mut self) -> Vec<Event> {
        if self.state.status.is_over() {
            return Vec::new();
        }

        let guess = match Word::new(&self.state.input) {
            Ok(word) if self.dictionary.contains(&word) => word,
            _ => {
                log::debug!("rejected guess {:?}", self.state.input);
                return vec![Event::InvalidWord];
            }
        };

        if self.state.row >= MAX_ATTEMPTS {
            return Vec::new();
        }

        let feedback = compute_feedback(&guess, &self.secret);
        let row = self.state.row;
        log::debug!("row {row}: {guess} {feedback}");

        self.state.hints.record(&guess, &feedback);
        let solved = guess == self.secret;
        self.state.history.push(GuessRecord {
            word: guess,
            feedback,
        });

        let mut events = vec![Event::RowScored { row, feedback }];

        if solved {
            self.state.status = GameStatus::Won;
        } else if row == MAX_ATTEMPTS - 1 {
            self.state.status = GameStatus::Lost;
        } else {
            self.state.row += 1;
            self.state.input.clear();
        }

        if let Some(outcome) = self.outcome() {
            log::info!(
                "game over: {:?} in {} attempts, word was {}",
                outcome.status,
                outcome.attempts,
                outcome.secret
            );
            events.push(Event::GameOver(outcome));
        }

        events
    }
}
