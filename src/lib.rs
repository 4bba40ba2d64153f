//! Palabra
//!
//! A Spanish daily word-guessing game for the terminal: six tries to find a
//! five letter word, with colored per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use palabra::core::{Feedback, Word};
//!
//! // Words normalize on construction
//! let guess = Word::new("perró").unwrap();
//! let target = Word::new("mundo").unwrap();
//!
//! // Score the guess
//! let feedback = Feedback::evaluate(&guess, &target);
//! println!("Resultado: {}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game flow: selection, validation, rounds, statistics
pub mod game;

// Word lists
pub mod wordbank;

// Statistics persistence
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
