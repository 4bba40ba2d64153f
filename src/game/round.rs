//! Round state: the six guess rows of one game
//!
//! A [`Round`] owns everything that changes while playing a single hidden
//! word: the scored rows, the letters of the row being typed, the keyboard
//! states, and whether the round has finished. Each user action is one
//! method call; every mutation goes through here, so the host (TUI or plain
//! terminal) never tracks game state of its own.

use crate::core::{Feedback, KeyboardState, WORD_LENGTH, Word, is_game_letter};
use crate::wordbank::WordBank;

use super::mode::GameMode;
use super::stats::RoundOutcome;
use super::validator::{GuessRejection, validate_guess};

/// Maximum guesses per round.
pub const MAX_GUESSES: usize = 6;

/// One submitted, scored guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub word: Word,
    pub feedback: Feedback,
}

/// State of one game round
#[derive(Debug, Clone)]
pub struct Round {
    mode: GameMode,
    target: Word,
    rows: Vec<GuessRow>,
    current: String,
    keyboard: KeyboardState,
    finished: Option<RoundOutcome>,
    hints_given: usize,
}

impl Round {
    /// Start a round in `mode` with `target` as the hidden word.
    #[must_use]
    pub fn new(mode: GameMode, target: Word) -> Self {
        Self {
            mode,
            target,
            rows: Vec::new(),
            current: String::new(),
            keyboard: KeyboardState::new(),
            finished: None,
            hints_given: 0,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Scored rows so far, oldest first.
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Letters typed into the active row.
    #[must_use]
    pub fn current_text(&self) -> &str {
        &self.current
    }

    /// Index of the active row (0-based). Equals [`MAX_GUESSES`] once all
    /// rows are used.
    #[must_use]
    pub fn row_index(&self) -> usize {
        self.rows.len()
    }

    /// Number of letters typed into the active row.
    #[must_use]
    pub fn column(&self) -> usize {
        self.current.chars().count()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// How the round ended, if it has.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.finished
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.finished.is_some()
    }

    /// Append a letter to the active row.
    ///
    /// Ignored (returns `false`) when the round is over, the row is full,
    /// or `letter` is outside the game alphabet. Callers map raw key input
    /// to the alphabet first; accented letters are not typeable.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.is_over() || self.column() >= WORD_LENGTH || !is_game_letter(letter) {
            return false;
        }
        self.current.push(letter);
        true
    }

    /// Remove the last letter of the active row.
    pub fn delete_letter(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.current.pop().is_some()
    }

    /// Submit the active row as a guess.
    ///
    /// On success the row is scored and advanced, and the keyboard updated.
    /// On rejection nothing changes - the typed letters stay editable.
    ///
    /// # Errors
    /// Returns a [`GuessRejection`] naming the first failing check.
    pub fn submit(&mut self, bank: &WordBank) -> Result<GuessRow, GuessRejection> {
        let raw = self.current.clone();
        self.submit_word(&raw, bank)
    }

    /// Submit an entire word at once, replacing whatever was typed.
    ///
    /// Used by line-based hosts where the player types the whole word and
    /// presses enter.
    ///
    /// # Errors
    /// Returns a [`GuessRejection`] naming the first failing check.
    pub fn submit_word(&mut self, raw: &str, bank: &WordBank) -> Result<GuessRow, GuessRejection> {
        if self.is_over() {
            return Err(GuessRejection::RoundOver);
        }

        let word = validate_guess(raw, bank)?;
        let feedback = Feedback::evaluate(&word, &self.target);
        self.keyboard.record(&word, &feedback);

        let row = GuessRow { word, feedback };
        self.rows.push(row.clone());
        self.current.clear();

        if feedback.is_win() {
            // Allow: row count never exceeds six
            #[allow(clippy::cast_possible_truncation)]
            let winning_row = self.rows.len() as u8;
            self.finished = Some(RoundOutcome::Won { row: winning_row });
        } else if self.rows.len() >= MAX_GUESSES {
            self.finished = Some(RoundOutcome::Lost);
        }

        Ok(row)
    }

    /// Reveal the next letter of the hidden word, left to right.
    ///
    /// Only available in modes with hints, at most once per position, and
    /// only while the round is live.
    pub fn hint(&mut self) -> Option<char> {
        if !self.mode.has_hints() || self.is_over() || self.hints_given >= WORD_LENGTH {
            return None;
        }
        let letter = self.target.letter_at(self.hints_given);
        self.hints_given += 1;
        Some(letter)
    }

    /// How many hint letters have been revealed.
    #[must_use]
    pub const fn hints_given(&self) -> usize {
        self.hints_given
    }

    /// The hidden word, when the mode (or a finished round) permits seeing
    /// it.
    #[must_use]
    pub fn reveal_answer(&self) -> Option<&Word> {
        if self.is_over() || self.mode.can_reveal_answer() {
            Some(&self.target)
        } else {
            None
        }
    }
}
