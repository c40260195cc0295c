//! Terminal output formatting
//!
//! Colored tiles and panels for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, write_board, write_outcome, write_stats};
