//! Word bank: the game's vocabularies
//!
//! Three lists feed the game: target words (eligible as the hidden word),
//! an extended list of accepted guesses, and a small tutorial pool. The
//! bank stores every entry normalized and keeps a combined dictionary for
//! guess lookup.

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::core::{WORD_LENGTH, normalize};

mod embedded;
pub mod loader;

pub use embedded::{
    TARGETS, TARGETS_COUNT, TUTORIAL, TUTORIAL_COUNT, VALID_GUESSES, VALID_GUESSES_COUNT,
};

/// The game's vocabularies, normalized and indexed for guess lookup
#[derive(Debug, Clone)]
pub struct WordBank {
    targets: Vec<String>,
    valid_guesses: Vec<String>,
    tutorial: Vec<String>,
    dictionary: FxHashSet<String>,
}

impl WordBank {
    /// Bank backed by the embedded word lists.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(TARGETS, VALID_GUESSES, TUTORIAL)
    }

    /// Bank with a custom target list and the embedded guess and tutorial
    /// lists. Used for the `--wordlist` option.
    #[must_use]
    pub fn with_custom_targets<S: AsRef<str>>(targets: &[S]) -> Self {
        Self::from_lists(targets, VALID_GUESSES, TUTORIAL)
    }

    /// Bank built from explicit raw lists.
    ///
    /// Every entry is normalized; entries that do not come out at exactly
    /// five letters are dropped. List order is preserved - the daily word
    /// schedule depends on it.
    #[must_use]
    pub fn from_lists<S: AsRef<str>, T: AsRef<str>, U: AsRef<str>>(
        targets: &[S],
        valid_guesses: &[T],
        tutorial: &[U],
    ) -> Self {
        let targets = sanitize("targets", targets);
        let valid_guesses = sanitize("valid_guesses", valid_guesses);
        let tutorial = sanitize("tutorial", tutorial);

        // Tutorial words join the dictionary too: a tutorial target must stay
        // guessable even when a custom list replaces the targets.
        let dictionary = targets
            .iter()
            .chain(valid_guesses.iter())
            .chain(tutorial.iter())
            .cloned()
            .collect();

        Self {
            targets,
            valid_guesses,
            tutorial,
            dictionary,
        }
    }

    /// Normalized words eligible as the hidden word, in list order.
    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Normalized words accepted as guesses but never chosen as targets.
    #[must_use]
    pub fn valid_guesses(&self) -> &[String] {
        &self.valid_guesses
    }

    /// Normalized tutorial pool.
    #[must_use]
    pub fn tutorial(&self) -> &[String] {
        &self.tutorial
    }

    /// Whether `normalized` is an accepted guess (target, extended, or
    /// tutorial list).
    #[must_use]
    pub fn is_in_dictionary(&self, normalized: &str) -> bool {
        self.dictionary.contains(normalized)
    }
}

/// Normalize a raw list, dropping entries that are not five letters long.
fn sanitize<S: AsRef<str>>(list_name: &str, raw: &[S]) -> Vec<String> {
    let kept: Vec<String> = raw
        .iter()
        .map(|entry| normalize(entry.as_ref()))
        .filter(|normalized| normalized.chars().count() == WORD_LENGTH)
        .collect();

    let dropped = raw.len() - kept.len();
    if dropped > 0 {
        warn!(list = list_name, dropped, "dropped non five-letter entries");
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn embedded_counts_match_consts() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
        assert_eq!(VALID_GUESSES.len(), VALID_GUESSES_COUNT);
        assert_eq!(TUTORIAL.len(), TUTORIAL_COUNT);
    }

    #[test]
    fn embedded_lists_are_reasonably_sized() {
        assert!(TARGETS_COUNT >= 300, "target list unexpectedly small");
        assert!(VALID_GUESSES_COUNT >= 150, "guess list unexpectedly small");
        assert!(TUTORIAL_COUNT >= 20, "tutorial list unexpectedly small");
    }

    #[test]
    fn embedded_entries_all_survive_sanitizing() {
        // The shipped lists contain only well-formed five letter words.
        let bank = WordBank::embedded();
        assert_eq!(bank.targets().len(), TARGETS_COUNT);
        assert_eq!(bank.valid_guesses().len(), VALID_GUESSES_COUNT);
        assert_eq!(bank.tutorial().len(), TUTORIAL_COUNT);
    }

    #[test]
    fn embedded_targets_are_valid_words() {
        let bank = WordBank::embedded();
        for target in bank.targets() {
            assert!(
                Word::new(target).is_ok(),
                "target '{target}' is not a valid game word"
            );
        }
    }

    #[test]
    fn embedded_tutorial_words_are_guessable() {
        // A tutorial target the player cannot type would be unwinnable.
        let bank = WordBank::embedded();
        for word in bank.tutorial() {
            assert!(
                bank.is_in_dictionary(word),
                "tutorial word '{word}' is not in the dictionary"
            );
        }
    }

    #[test]
    fn entries_are_normalized() {
        let bank = WordBank::from_lists(&["avión", "niños"], &["árbol"], &["casas"]);
        assert_eq!(bank.targets(), ["AVION", "NIÑOS"]);
        assert_eq!(bank.valid_guesses(), ["ARBOL"]);
        assert_eq!(bank.tutorial(), ["CASAS"]);
    }

    #[test]
    fn non_conforming_entries_are_dropped_in_order() {
        let bank = WordBank::from_lists(
            &["mundo", "sol", "planta", "gatos"],
            &[] as &[&str],
            &[] as &[&str],
        );
        assert_eq!(bank.targets(), ["MUNDO", "GATOS"]);
    }

    #[test]
    fn dictionary_spans_all_three_lists() {
        let bank = WordBank::from_lists(&["mundo"], &["rezar"], &["casas"]);
        assert!(bank.is_in_dictionary("MUNDO"));
        assert!(bank.is_in_dictionary("REZAR"));
        assert!(bank.is_in_dictionary("CASAS"));
        assert!(!bank.is_in_dictionary("XXXXX"));
    }

    #[test]
    fn dictionary_lookup_is_exact_normalized_form() {
        let bank = WordBank::from_lists(&["avión"], &[] as &[&str], &[] as &[&str]);
        assert!(bank.is_in_dictionary("AVION"));
        // Raw, unnormalized text is not a dictionary key.
        assert!(!bank.is_in_dictionary("avión"));
    }

    #[test]
    fn custom_targets_keep_embedded_guess_list() {
        let bank = WordBank::with_custom_targets(&["mundo", "perro"]);
        assert_eq!(bank.targets(), ["MUNDO", "PERRO"]);
        // "rezar" only appears in the embedded extended list.
        assert!(bank.is_in_dictionary("REZAR"));
    }

    #[test]
    fn custom_targets_keep_tutorial_words_guessable() {
        // A tutorial round must stay winnable when the targets are swapped,
        // even for tutorial words the custom list does not contain.
        let bank = WordBank::with_custom_targets(&["lunes"]);
        for word in bank.tutorial() {
            assert!(
                bank.is_in_dictionary(word),
                "tutorial word '{word}' is not an accepted guess"
            );
        }
    }
}
