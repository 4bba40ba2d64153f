//! Display functions for the plain terminal game

use colored::Colorize;

use super::formatters::{create_progress_bar, tile};
use crate::core::{KeyboardState, WORD_LENGTH};
use crate::game::{MAX_GUESSES, Round, RoundOutcome, Stats};

/// Key rows of the Spanish on-screen keyboard.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÑ", "ZXCVBNM"];

/// Print the guess grid: scored rows, the row being typed, then blanks.
pub fn print_board(round: &Round) {
    println!();
    for row in round.rows() {
        let tiles: Vec<String> = row
            .word
            .letters()
            .iter()
            .zip(row.feedback.iter())
            .map(|(&letter, feedback)| tile(letter, feedback).to_string())
            .collect();
        println!("   {}", tiles.join(" "));
    }

    let mut printed = round.row_index();
    if !round.is_over() && printed < MAX_GUESSES {
        let mut cells: Vec<String> = round
            .current_text()
            .chars()
            .map(|letter| format!(" {letter} ").bold().to_string())
            .collect();
        while cells.len() < WORD_LENGTH {
            cells.push(" _ ".bright_black().to_string());
        }
        println!("   {}", cells.join(" "));
        printed += 1;
    }

    for _ in printed..MAX_GUESSES {
        let blanks: Vec<String> = (0..WORD_LENGTH)
            .map(|_| " · ".bright_black().to_string())
            .collect();
        println!("   {}", blanks.join(" "));
    }
    println!();
}

/// Print the on-screen keyboard with per-key feedback colors.
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (index, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| match keyboard.get(letter) {
                Some(feedback) => tile(letter, feedback).to_string(),
                None => format!(" {letter} "),
            })
            .collect();
        println!("{}{}", "  ".repeat(index), keys.join(""));
    }
    println!();
}

/// Print the end-of-round message.
pub fn print_round_end(round: &Round) {
    match round.outcome() {
        Some(RoundOutcome::Won { row }) => {
            println!("{}", "¡Excelente! 🎉".green().bold());
            let plural = if row == 1 { "intento" } else { "intentos" };
            println!("Acertaste en {row} {plural}.");
        }
        Some(RoundOutcome::Lost) => {
            if let Some(answer) = round.reveal_answer() {
                println!("{}", format!("La palabra era: {answer}").red().bold());
            }
        }
        None => {}
    }
}

/// Print the saved statistics with a win distribution chart.
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "ESTADÍSTICAS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Jugadas:       {}", stats.games_played);
    println!(
        "   Victorias:     {}",
        format!("{}%", stats.win_rate_percent()).bright_yellow().bold()
    );
    println!("   Racha actual:  {}", stats.current_streak);
    println!("   Mejor racha:   {}", stats.max_streak);

    println!("\n {} ", "Distribución".bright_cyan().bold());
    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (index, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max_count.max(1)), 20);
        println!("   {}: {} {count}", index + 1, bar.green());
    }
    println!();
}
