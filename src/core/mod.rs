//! Core domain types for the word game
//!
//! This module contains the fundamental domain types: text normalization,
//! the five letter word, and guess feedback. All types here are pure,
//! testable, and have clear mathematical properties.

mod feedback;
mod word;

pub mod normalize;

pub use feedback::{Feedback, KeyboardState, LetterFeedback};
pub use normalize::{is_game_letter, normalize};
pub use word::{WORD_LENGTH, Word, WordError};
