//! Guess validation against the dictionary
//!
//! Checks run in a fixed order: enough letters entered, well formed after
//! normalization, present in the dictionary. The first failing check wins,
//! so the player always sees the most specific message.

use std::fmt;

use crate::core::{WORD_LENGTH, Word, WordError};
use crate::wordbank::WordBank;

/// Why a submitted guess was not accepted
///
/// `Display` is the message shown to the player, in the game's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    /// Fewer than five characters entered.
    Incomplete { entered: usize },
    /// The input is not a well formed five letter word after normalization.
    Malformed(WordError),
    /// A well formed word that is not in the accepted vocabulary.
    NotInDictionary(String),
    /// The round is already over.
    RoundOver,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { .. } => write!(f, "No hay suficientes letras"),
            Self::Malformed(_) | Self::NotInDictionary(_) => write!(f, "Palabra no válida"),
            Self::RoundOver => write!(f, "La ronda ya ha terminado"),
        }
    }
}

impl std::error::Error for GuessRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

/// Validate a raw guess and return it as a normalized [`Word`].
///
/// The raw character count is checked before normalization so that a
/// half-typed row reads as incomplete rather than malformed.
///
/// # Errors
/// Returns a [`GuessRejection`] naming the first failing check.
pub fn validate_guess(raw: &str, bank: &WordBank) -> Result<Word, GuessRejection> {
    let entered = raw.chars().count();
    if entered < WORD_LENGTH {
        return Err(GuessRejection::Incomplete { entered });
    }

    let word = Word::new(raw).map_err(GuessRejection::Malformed)?;

    if !bank.is_in_dictionary(word.text()) {
        return Err(GuessRejection::NotInDictionary(word.text().to_owned()));
    }

    Ok(word)
}
