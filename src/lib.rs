//! Terminal Wordle
//!
//! Guess the secret five-letter word in six tries. The game engine is
//! independent of any UI; the TUI and the line-mode command are two renderers
//! driving the same [`game::GuessEngine`].
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_tui::dictionary::loader::from_slice;
//! use wordle_tui::game::{GameStatus, GuessEngine};
//!
//! let dictionary = from_slice(&["array", "allot"]).unwrap();
//! let mut engine = GuessEngine::with_secret(&dictionary, StdRng::seed_from_u64(1), "array").unwrap();
//!
//! for ch in "array".chars() {
//!     engine.type_letter(ch);
//! }
//! engine.submit();
//!
//! assert_eq!(engine.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Playable word list
pub mod dictionary;

// Engine and game state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
