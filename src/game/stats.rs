//! Win/loss statistics
//!
//! A pure fold over finished rounds: the tracker never touches the clock or
//! the disk. At most one outcome is recorded per calendar day, which makes
//! recording idempotent - replaying the same day's outcome changes nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::round::MAX_GUESSES;

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Won on guess row `row` (1 through 6).
    Won { row: u8 },
    /// All six rows used without a win.
    Lost,
}

/// The persisted win/loss record
///
/// Field names are part of the on-disk format and must stay stable across
/// versions. Unknown or missing fields deserialize to the zero value, so an
/// older save always loads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by row: index 0 counts wins on the first guess.
    pub guess_distribution: [u32; MAX_GUESSES],
    /// Last calendar day an outcome was recorded, if any.
    pub last_played_date: Option<NaiveDate>,
}

impl Stats {
    /// Fold a finished round into the record.
    ///
    /// Returns the updated record, leaving `self` untouched. If an outcome
    /// has already been recorded for `today` the record comes back
    /// unchanged.
    #[must_use]
    pub fn record(&self, outcome: RoundOutcome, today: NaiveDate) -> Self {
        if self.last_played_date == Some(today) {
            return self.clone();
        }

        let mut updated = self.clone();
        updated.games_played += 1;
        match outcome {
            RoundOutcome::Won { row } => {
                updated.games_won += 1;
                updated.current_streak += 1;
                updated.max_streak = updated.max_streak.max(updated.current_streak);
                if let Some(bucket) = usize::from(row)
                    .checked_sub(1)
                    .and_then(|index| updated.guess_distribution.get_mut(index))
                {
                    *bucket += 1;
                }
            }
            RoundOutcome::Lost => updated.current_streak = 0,
        }
        updated.last_played_date = Some(today);
        updated
    }

    /// Share of played games won, rounded to a whole percent.
    #[must_use]
    pub fn win_rate_percent(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        // Allow: the rounded percentage always fits
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent =
            (f64::from(self.games_won) * 100.0 / f64::from(self.games_played)).round() as u32;
        percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(offset)
    }

    #[test]
    fn first_win_from_zero() {
        let stats = Stats::default().record(RoundOutcome::Won { row: 3 }, day(0));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.guess_distribution, [0, 0, 1, 0, 0, 0]);
        assert_eq!(stats.last_played_date, Some(day(0)));
    }

    #[test]
    fn loss_counts_the_game_and_resets_the_streak() {
        let stats = Stats::default()
            .record(RoundOutcome::Won { row: 1 }, day(0))
            .record(RoundOutcome::Won { row: 2 }, day(1))
            .record(RoundOutcome::Lost, day(2));
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn max_streak_survives_a_reset() {
        let stats = Stats::default()
            .record(RoundOutcome::Won { row: 1 }, day(0))
            .record(RoundOutcome::Won { row: 1 }, day(1))
            .record(RoundOutcome::Won { row: 1 }, day(2))
            .record(RoundOutcome::Lost, day(3))
            .record(RoundOutcome::Won { row: 1 }, day(4));
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn same_day_is_recorded_at_most_once() {
        let once = Stats::default().record(RoundOutcome::Won { row: 2 }, day(0));
        let twice = once.record(RoundOutcome::Won { row: 5 }, day(0));
        assert_eq!(once, twice);

        // A loss on the same day is ignored just the same.
        let still = twice.record(RoundOutcome::Lost, day(0));
        assert_eq!(once, still);
    }

    #[test]
    fn recording_is_pure() {
        let zero = Stats::default();
        let _ = zero.record(RoundOutcome::Won { row: 1 }, day(0));
        assert_eq!(zero, Stats::default());
    }

    #[test]
    fn distribution_counts_by_winning_row() {
        let mut stats = Stats::default();
        for (offset, row) in [(0, 1), (1, 6), (2, 6), (3, 3)] {
            stats = stats.record(RoundOutcome::Won { row }, day(offset));
        }
        assert_eq!(stats.guess_distribution, [1, 0, 1, 0, 0, 2]);
    }

    #[test]
    fn out_of_range_row_is_not_counted_in_the_distribution() {
        let stats = Stats::default().record(RoundOutcome::Won { row: 0 }, day(0));
        assert_eq!(stats.guess_distribution, [0; 6]);
        assert_eq!(stats.games_won, 1);

        let stats = Stats::default().record(RoundOutcome::Won { row: 7 }, day(0));
        assert_eq!(stats.guess_distribution, [0; 6]);
    }

    #[test]
    fn win_rate_rounds_to_whole_percent() {
        assert_eq!(Stats::default().win_rate_percent(), 0);

        let stats = Stats::default()
            .record(RoundOutcome::Won { row: 1 }, day(0))
            .record(RoundOutcome::Won { row: 1 }, day(1))
            .record(RoundOutcome::Lost, day(2));
        assert_eq!(stats.win_rate_percent(), 67);
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let stats = Stats::default().record(RoundOutcome::Won { row: 2 }, day(0));
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["gamesPlayed"], 1);
        assert_eq!(value["gamesWon"], 1);
        assert_eq!(value["currentStreak"], 1);
        assert_eq!(value["maxStreak"], 1);
        assert_eq!(value["guessDistribution"][1], 1);
        assert_eq!(value["lastPlayedDate"], "2025-01-01");
    }

    #[test]
    fn deserializes_a_partial_record() {
        // Older saves may lack newer fields; missing ones default to zero.
        let stats: Stats = serde_json::from_str(r#"{"gamesPlayed": 7, "gamesWon": 4}"#).unwrap();
        assert_eq!(stats.games_played, 7);
        assert_eq!(stats.games_won, 4);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.last_played_date, None);
    }

    #[test]
    fn roundtrips_through_json() {
        let stats = Stats::default()
            .record(RoundOutcome::Won { row: 4 }, day(0))
            .record(RoundOutcome::Lost, day(1));
        let json = serde_json::to_string(&stats).unwrap();
        let back: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }

    fn arb_outcome() -> impl Strategy<Value = RoundOutcome> {
        prop_oneof![
            (1u8..=6).prop_map(|row| RoundOutcome::Won { row }),
            Just(RoundOutcome::Lost),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_over_any_history(
            history in proptest::collection::vec((arb_outcome(), 0u64..400), 0..40)
        ) {
            let mut stats = Stats::default();
            for (outcome, offset) in history {
                stats = stats.record(outcome, day(offset));
                prop_assert!(stats.games_won <= stats.games_played);
                prop_assert!(stats.current_streak <= stats.max_streak);
                prop_assert!(stats.current_streak <= stats.games_won);
                let distributed: u32 = stats.guess_distribution.iter().sum();
                prop_assert_eq!(distributed, stats.games_won);
            }
        }

        #[test]
        fn replaying_a_day_never_changes_the_record(
            outcome in arb_outcome(),
            replay in arb_outcome(),
            offset in 0u64..400,
        ) {
            let once = Stats::default().record(outcome, day(offset));
            prop_assert_eq!(once.record(replay, day(offset)), once.clone());
        }
    }
}
