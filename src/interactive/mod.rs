//! Interactive TUI
//!
//! ratatui renderer and crossterm input adapter around a [`crate::game::GuessEngine`].

mod app;
pub mod keyboard;
mod rendering;

pub use app::{App, INVALID_WORD_DISPLAY, run_tui};
pub use rendering::{ScreenLayout, centered_rect, ui};
