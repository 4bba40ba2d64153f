//! Statistics command
//!
//! Prints the saved win/loss record and the time until the next daily word.

use chrono::Local;

use crate::game::selector;
use crate::output::display::print_stats;
use crate::output::formatters::format_countdown;
use crate::storage::StatsStore;

/// Print the saved statistics.
pub fn run_stats(store: &StatsStore) {
    let stats = store.load();
    print_stats(&stats);

    let now = Local::now().naive_local();
    let seconds = (selector::next_rollover(now) - now).num_seconds();
    println!("⏳ Próxima palabra en {}\n", format_countdown(seconds));
}
