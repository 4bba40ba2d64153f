//! Terminal output formatting
//!
//! Display utilities for the plain terminal game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{KEYBOARD_ROWS, print_board, print_keyboard, print_round_end, print_stats};
