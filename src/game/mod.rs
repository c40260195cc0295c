//! Game engine and state
//!
//! The engine is the only writer of game state. Renderers call its three
//! input operations and redraw from the events it returns.

mod engine;
mod event;
mod state;
mod stats;

pub use engine::{EngineError, GuessEngine};
pub use event::{Event, Outcome};
pub use state::{GameState, GameStatus, GuessRecord, MAX_ATTEMPTS};
pub use stats::SessionStats;
