//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::LetterFeedback;

/// Render one scored letter as a colored tile
#[must_use]
pub fn tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let cell = format!(" {letter} ");
    match feedback {
        LetterFeedback::Correct => cell.black().on_green(),
        LetterFeedback::Present => cell.black().on_yellow(),
        LetterFeedback::Absent => cell.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let filled = if max > 0.0 {
        (((value / max) * width as f64) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a second count as `3h 25m 10s`
///
/// Negative counts clamp to zero - the countdown never runs backwards.
#[must_use]
pub fn format_countdown(seconds: i64) -> String {
    let clamped = seconds.max(0);
    let hours = clamped / 3600;
    let minutes = (clamped % 3600) / 60;
    let secs = clamped % 60;
    format!("{hours}h {minutes}m {secs}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn countdown_formats_hours_minutes_seconds() {
        assert_eq!(format_countdown(0), "0h 0m 0s");
        assert_eq!(format_countdown(59), "0h 0m 59s");
        assert_eq!(format_countdown(3_600), "1h 0m 0s");
        assert_eq!(format_countdown(19_807), "5h 30m 7s");
    }

    #[test]
    fn countdown_clamps_negative_values() {
        assert_eq!(format_countdown(-42), "0h 0m 0s");
    }

    #[test]
    fn tile_carries_the_letter() {
        // Color codes vary by terminal support; the text must not.
        let rendered = tile('Ñ', LetterFeedback::Correct);
        assert!(rendered.contains('Ñ'));
    }
}
