//! Interactive TUI game
//!
//! Full-screen terminal play: the guess grid, the on-screen keyboard, and
//! a statistics panel, driven one key event at a time.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
