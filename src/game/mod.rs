//! Game flow: modes, word selection, guess validation, round state, and
//! statistics
//!
//! Everything here is deterministic given its inputs (the clock and the RNG
//! are passed in or isolated behind small functions), which keeps the whole
//! game logic unit-testable without a terminal.

mod mode;
mod round;
mod stats;
mod validator;

pub mod selector;

pub use mode::GameMode;
pub use round::{GuessRow, MAX_GUESSES, Round};
pub use selector::{random_word, target_for_mode, tutorial_word, word_of_day};
pub use stats::{RoundOutcome, Stats};
pub use validator::{GuessRejection, validate_guess};
