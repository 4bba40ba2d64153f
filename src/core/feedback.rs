//! Guess feedback calculation and keyboard state
//!
//! Feedback marks every letter of a guess against the hidden word:
//! - `Correct` - right letter, right position
//! - `Present` - letter occurs elsewhere in the word
//! - `Absent` - letter does not occur (or all its occurrences are used up)
//!
//! Repeated letters are budgeted: a letter is marked `Present` at most as
//! many times as it still occurs in the target after exact matches are
//! claimed, scanning left to right.

use rustc_hash::FxHashMap;

use super::word::{WORD_LENGTH, Word};

/// Feedback for a single letter of a guess
///
/// The derived ordering is the keyboard precedence: `Absent < Present <
/// Correct`. A key on the on-screen keyboard only ever moves up this
/// ordering, never down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    /// Letter does not occur in the remaining budget.
    Absent,
    /// Letter occurs in the word at a different position.
    Present,
    /// Letter is in the correct position.
    Correct,
}

impl LetterFeedback {
    /// Combine with feedback for the same key from a later guess.
    ///
    /// `Correct` beats `Present` beats `Absent`; a state never downgrades.
    #[inline]
    #[must_use]
    pub fn upgrade(self, later: Self) -> Self {
        self.max(later)
    }
}

/// Per-position feedback for one complete guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All positions correct (a winning guess)
    pub const WIN: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and remove each matched
    ///    letter from the target's remaining letter budget
    /// 2. Second pass, left to right: mark `Present` while the letter still
    ///    has budget, otherwise leave `Absent`
    ///
    /// # Examples
    /// ```
    /// use palabra::core::{Feedback, LetterFeedback, Word};
    ///
    /// let guess = Word::new("ratas").unwrap();
    /// let target = Word::new("carro").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// // R(present) A(correct) T(absent) A(absent) S(absent)
    /// assert_eq!(feedback.letters()[0], LetterFeedback::Present);
    /// assert_eq!(feedback.letters()[1], LetterFeedback::Correct);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: mark exact matches
        // Allow: index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letters()[i] == target.letters()[i] {
                result[i] = LetterFeedback::Correct;

                // Remove from the remaining budget
                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: mark present letters from what is left, left to right
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterFeedback::Absent {
                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterFeedback::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// The per-position letter feedback, in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Whether every position is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    /// Iterate over the per-position feedback
    pub fn iter(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.0.iter().copied()
    }

    /// Convert the feedback row to a share-friendly emoji string
    ///
    /// # Examples
    /// ```
    /// use palabra::core::{Feedback, Word};
    ///
    /// let guess = Word::new("ratas").unwrap();
    /// let target = Word::new("carro").unwrap();
    /// assert_eq!(Feedback::evaluate(&guess, &target).to_emoji(), "🟨🟩⬜⬜⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|f| match f {
                LetterFeedback::Correct => '🟩',
                LetterFeedback::Present => '🟨',
                LetterFeedback::Absent => '⬜',
            })
            .collect()
    }
}

/// Aggregated per-key feedback across all guesses of a round
///
/// Drives the coloring of the on-screen keyboard. Each key holds the best
/// feedback any guess has produced for that letter.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    keys: FxHashMap<char, LetterFeedback>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the per-key states.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (letter, state) in guess.letters().iter().copied().zip(feedback.iter()) {
            self.keys
                .entry(letter)
                .and_modify(|current| *current = current.upgrade(state))
                .or_insert(state);
        }
    }

    /// The current state of a key, if any guess has used the letter.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        self.keys.get(&letter).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Absent, Correct, Present};
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = Feedback::evaluate(&word("girar"), &word("bueno"));
        assert_eq!(feedback.letters(), &[Absent; 5]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn feedback_exact_match_wins() {
        let feedback = Feedback::evaluate(&word("mundo"), &word("mundo"));
        assert_eq!(feedback, Feedback::WIN);
        assert!(feedback.is_win());
    }

    #[test]
    fn feedback_repeated_guess_letter_single_target_letter() {
        // MONDO vs MUNDO: the target's only O is claimed by the exact match
        // at position 4, so the displaced O at position 1 is absent.
        let feedback = Feedback::evaluate(&word("mondo"), &word("mundo"));
        assert_eq!(
            feedback.letters(),
            &[Correct, Absent, Correct, Correct, Correct]
        );
    }

    #[test]
    fn feedback_second_duplicate_exceeds_budget() {
        // RATAS vs CARRO: the A at position 1 is exact; the second A has no
        // budget left and stays absent. R is present once.
        let feedback = Feedback::evaluate(&word("ratas"), &word("carro"));
        assert_eq!(
            feedback.letters(),
            &[Present, Correct, Absent, Absent, Absent]
        );
    }

    #[test]
    fn feedback_left_to_right_budget_order() {
        // ERROR vs CARRO: target has two Rs. The exact match at position 2
        // takes one; the leftmost displaced R (position 1) takes the other;
        // the R at position 4 starves.
        let feedback = Feedback::evaluate(&word("error"), &word("carro"));
        assert_eq!(
            feedback.letters(),
            &[Absent, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_with_no_exact_match() {
        // OSADO vs GATOS: no position matches at all. O, S and A are each
        // present once; the second O finds the budget already spent.
        let feedback = Feedback::evaluate(&word("osado"), &word("gatos"));
        assert_eq!(
            feedback.letters(),
            &[Present, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_with_enye() {
        let feedback = Feedback::evaluate(&word("ñoños"), &word("niños"));
        // Ñ O Ñ O S vs N I Ñ O S: position 2, 3, 4 exact; leading Ñ has no
        // budget left; O at position 1 had its only O claimed at position 3.
        assert_eq!(
            feedback.letters(),
            &[Absent, Absent, Correct, Correct, Correct]
        );
    }

    #[test]
    fn feedback_emoji_row() {
        let feedback = Feedback::evaluate(&word("error"), &word("carro"));
        assert_eq!(feedback.to_emoji(), "⬜🟨🟩🟨⬜");
        assert_eq!(Feedback::WIN.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn upgrade_never_downgrades() {
        assert_eq!(Absent.upgrade(Present), Present);
        assert_eq!(Present.upgrade(Absent), Present);
        assert_eq!(Present.upgrade(Correct), Correct);
        assert_eq!(Correct.upgrade(Present), Correct);
        assert_eq!(Correct.upgrade(Absent), Correct);
        assert_eq!(Absent.upgrade(Absent), Absent);
    }

    #[test]
    fn keyboard_tracks_best_state_per_key() {
        let target = word("carro");
        let mut keyboard = KeyboardState::new();

        // ERROR: R present at position 1, correct at position 2.
        let guess = word("error");
        keyboard.record(&guess, &Feedback::evaluate(&guess, &target));
        assert_eq!(keyboard.get('R'), Some(Correct));
        assert_eq!(keyboard.get('E'), Some(Absent));
        assert_eq!(keyboard.get('O'), Some(Present));

        // RATAS: R merely present now - the key must stay correct.
        let guess = word("ratas");
        keyboard.record(&guess, &Feedback::evaluate(&guess, &target));
        assert_eq!(keyboard.get('R'), Some(Correct));
        assert_eq!(keyboard.get('A'), Some(Correct));
        assert_eq!(keyboard.get('T'), Some(Absent));

        // Untouched keys have no state.
        assert_eq!(keyboard.get('Z'), None);
    }

    fn small_alphabet_word() -> impl Strategy<Value = Word> {
        // Three letters force duplicate-heavy words.
        "[ABC]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn self_evaluation_always_wins(guess in small_alphabet_word()) {
            prop_assert!(Feedback::evaluate(&guess, &guess).is_win());
        }

        #[test]
        fn correct_exactly_at_matching_positions(
            guess in small_alphabet_word(),
            target in small_alphabet_word(),
        ) {
            let feedback = Feedback::evaluate(&guess, &target);
            for i in 0..WORD_LENGTH {
                let positions_match = guess.letters()[i] == target.letters()[i];
                prop_assert_eq!(feedback.letters()[i] == Correct, positions_match);
            }
        }

        #[test]
        fn marks_never_exceed_target_counts(
            guess in small_alphabet_word(),
            target in small_alphabet_word(),
        ) {
            // Per letter: correct + present marks <= occurrences in target.
            let feedback = Feedback::evaluate(&guess, &target);
            for letter in ['A', 'B', 'C'] {
                let marks = guess
                    .letters()
                    .iter()
                    .zip(feedback.iter())
                    .filter(|&(&l, f)| l == letter && f != Absent)
                    .count();
                let in_target =
                    target.letters().iter().filter(|&&l| l == letter).count();
                prop_assert!(marks <= in_target);
            }
        }

        #[test]
        fn keyboard_state_is_monotone(
            guesses in proptest::collection::vec(small_alphabet_word(), 1..6),
            target in small_alphabet_word(),
        ) {
            let mut keyboard = KeyboardState::new();
            let mut previous: FxHashMap<char, LetterFeedback> = FxHashMap::default();
            for guess in &guesses {
                keyboard.record(guess, &Feedback::evaluate(guess, &target));
                for letter in ['A', 'B', 'C'] {
                    if let Some(earlier) = previous.get(&letter) {
                        let now = keyboard.get(letter).unwrap();
                        prop_assert!(now >= *earlier);
                    }
                    if let Some(now) = keyboard.get(letter) {
                        previous.insert(letter, now);
                    }
                }
            }
        }
    }
}
