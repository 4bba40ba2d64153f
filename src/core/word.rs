//! The five letter game word
//!
//! A [`Word`] is always stored in normalized form (accent-stripped,
//! upper-case, Ñ preserved) and is always exactly five letters of the game
//! alphabet. Construction is the only place that can fail; everything
//! downstream works with known-good words.

use rustc_hash::FxHashMap;
use std::fmt;

use super::normalize::{is_game_letter, normalize};

/// Number of letters in every playable word.
pub const WORD_LENGTH: usize = 5;

/// A normalized five letter Spanish word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The normalized text is not exactly five letters long.
    InvalidLength(usize),
    /// The normalized text contains a character outside A–Z and Ñ.
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "word contains invalid character '{c}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a word from raw user or word-list text.
    ///
    /// The input is normalized first, so `"avión"`, `"AVION"` and `"Avion"`
    /// all produce the same word.
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text:
    /// - is not exactly 5 letters long
    /// - contains a character outside the game alphabet (A–Z plus Ñ)
    ///
    /// # Examples
    /// ```
    /// use palabra::core::Word;
    ///
    /// let word = Word::new("avión").unwrap();
    /// assert_eq!(word.text(), "AVION");
    ///
    /// assert!(Word::new("sol").is_err());
    /// assert!(Word::new("mun2o").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length
    /// validation.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(raw.as_ref());

        // Validate length in letters, not bytes - Ñ is two bytes
        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        // Validate the alphabet
        if let Some(bad) = text.chars().find(|&c| !is_game_letter(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters: [char; WORD_LENGTH] = text
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, letters })
    }

    /// Get the normalized text as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the individual letters, in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with repeated letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0u8) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
