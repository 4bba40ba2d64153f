//! Word selection: the daily word, practice draws, and tutorial draws
//!
//! The daily word is a pure function of the calendar date: days elapsed
//! since the launch epoch, modulo the target list length. Every player with
//! the same build therefore sees the same word on the same day. The schedule
//! is tied to the list's length and order - reordering or resizing the list
//! shifts which word any given day maps to.

use chrono::{NaiveDate, NaiveDateTime};
use rand::prelude::IndexedRandom;
use tracing::{debug, warn};

use super::mode::GameMode;
use crate::core::Word;
use crate::wordbank::WordBank;

/// First day the game was served; day indices count from here.
const LAUNCH_EPOCH: (i32, u32, u32) = (2025, 1, 1);

/// Fixed target when the bank cannot produce a valid daily or practice word.
const FALLBACK_TARGET: &str = "MUNDO";

/// Fixed target when the tutorial pool cannot produce a valid word.
const FALLBACK_TUTORIAL: &str = "GATOS";

/// Bound on random draws before giving up on a pool.
const MAX_RANDOM_ATTEMPTS: usize = 100;

fn epoch() -> NaiveDate {
    let (year, month, day) = LAUNCH_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day).expect("launch epoch is a valid date")
}

fn fallback(raw: &str) -> Word {
    Word::new(raw).expect("fallback word is valid")
}

/// Whole calendar days between the launch epoch and `date`.
///
/// Negative for dates before the epoch; selection still works there via
/// euclidean remainder.
#[must_use]
pub fn day_index(date: NaiveDate) -> i64 {
    (date - epoch()).num_days()
}

/// The shared hidden word for `date`.
///
/// The bank is already length-filtered, but a malformed entry must never
/// reach the evaluator, so the scheduled slot is re-validated and probing
/// moves forward through the list on failure. If the whole list is unusable
/// the fixed fallback word is returned.
#[must_use]
pub fn word_of_day(bank: &WordBank, date: NaiveDate) -> Word {
    let targets = bank.targets();
    if targets.is_empty() {
        warn!("target list is empty, using the fallback daily word");
        return fallback(FALLBACK_TARGET);
    }

    let len = i64::try_from(targets.len()).unwrap_or(i64::MAX);
    // Allow: rem_euclid of a positive modulus is non-negative and < len
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let start = day_index(date).rem_euclid(len) as usize;

    for offset in 0..targets.len() {
        let candidate = &targets[(start + offset) % targets.len()];
        match Word::new(candidate) {
            Ok(word) => {
                if offset > 0 {
                    warn!(
                        skipped = offset,
                        "daily slot held invalid entries, probed forward"
                    );
                }
                return word;
            }
            Err(err) => {
                debug!(candidate = %candidate, error = %err, "invalid entry in target list");
            }
        }
    }

    warn!("no usable word in the target list, using the fallback daily word");
    fallback(FALLBACK_TARGET)
}

/// A random practice target.
#[must_use]
pub fn random_word(bank: &WordBank) -> Word {
    draw(bank.targets(), FALLBACK_TARGET, "targets")
}

/// A random tutorial target from the easy pool.
#[must_use]
pub fn tutorial_word(bank: &WordBank) -> Word {
    draw(bank.tutorial(), FALLBACK_TUTORIAL, "tutorial")
}

/// The hidden word for a new round in `mode` on `today`.
#[must_use]
pub fn target_for_mode(bank: &WordBank, mode: GameMode, today: NaiveDate) -> Word {
    match mode {
        GameMode::Daily => word_of_day(bank, today),
        GameMode::Practice => random_word(bank),
        GameMode::Tutorial => tutorial_word(bank),
    }
}

/// The next local midnight after `after`, when the daily word changes.
#[must_use]
pub fn next_rollover(after: NaiveDateTime) -> NaiveDateTime {
    after
        .date()
        .succ_opt()
        .and_then(|next_day| next_day.and_hms_opt(0, 0, 0))
        .unwrap_or(after)
}

/// Draw a valid word from `pool`, with a bounded number of attempts.
fn draw(pool: &[String], fallback_raw: &str, pool_name: &str) -> Word {
    let mut rng = rand::rng();
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let Some(candidate) = pool.choose(&mut rng) else {
            break;
        };
        match Word::new(candidate) {
            Ok(word) => return word,
            Err(err) => debug!(candidate = %candidate, error = %err, "invalid entry in pool"),
        }
    }
    warn!(
        pool = pool_name,
        "no valid word after bounded random draws, using the fallback word"
    );
    fallback(fallback_raw)
}
