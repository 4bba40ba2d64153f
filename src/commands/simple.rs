//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a whole word, press enter, read
//! the colored grid. Commands are all shorter than five letters so they can
//! never shadow a guess.

use std::io::{self, Write};

use chrono::Local;
use colored::Colorize;

use crate::game::{GameMode, Round, Stats, selector, target_for_mode};
use crate::output::display::{print_board, print_keyboard, print_round_end, print_stats};
use crate::output::formatters::format_countdown;
use crate::storage::StatsStore;
use crate::wordbank::WordBank;

/// Run the simple line-based game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(bank: &WordBank, mode: GameMode, store: &StatsStore) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 PALABRA - Juego de palabras                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Modo: {}\n", mode.title().bold());
    match mode {
        GameMode::Daily => println!("Adivina la palabra del día en seis intentos."),
        GameMode::Practice => println!("Palabras al azar, tantas rondas como quieras."),
        GameMode::Tutorial => println!("Palabras fáciles para aprender, con pistas."),
    }
    println!("Tras cada intento verás el resultado letra a letra:\n");
    println!("  - 🟩 letra en su sitio");
    println!("  - 🟨 letra presente en otra posición");
    println!("  - ⬜ letra ausente\n");
    println!("Comandos: 'q' salir · 'otra' nueva ronda · 'p' pista · 'r' revelar\n");

    let mut stats = store.load();
    let mut round = Round::new(mode, target_for_mode(bank, mode, Local::now().date_naive()));

    print_board(&round);

    loop {
        let input = get_user_input("Palabra")?;

        match input.to_lowercase().as_str() {
            "" => {}
            "q" | "fin" => {
                println!("\n👋 ¡Hasta pronto!\n");
                return Ok(());
            }
            "n" | "otra" => {
                if mode.records_stats() && !round.is_over() {
                    println!("La palabra del día es una sola: termina la ronda primero.\n");
                } else {
                    round = Round::new(mode, target_for_mode(bank, mode, Local::now().date_naive()));
                    println!("\n🔄 ¡Nueva ronda!\n");
                    print_board(&round);
                }
            }
            "p" => match round.hint() {
                Some(letter) => {
                    let position = round.hints_given();
                    println!("💡 Pista: la letra {position} es '{letter}'\n");
                }
                None => println!("No hay pistas disponibles.\n"),
            },
            "r" => match round.reveal_answer() {
                // Always available once the round ends, in any mode.
                Some(answer) => {
                    println!("🔎 La palabra es: {}\n", answer.to_string().bold());
                }
                None => println!("En este modo no se puede revelar la palabra.\n"),
            },
            raw => match round.submit_word(raw, bank) {
                Ok(_) => {
                    print_board(&round);
                    print_keyboard(round.keyboard());

                    if round.is_over() {
                        finish_round(&round, &mut stats, store);
                        if mode.records_stats() {
                            print_daily_countdown();
                            return Ok(());
                        }
                        println!("Escribe 'otra' para seguir jugando o 'q' para salir.\n");
                    }
                }
                Err(rejection) => println!("{}\n", rejection.to_string().yellow()),
            },
        }
    }
}

/// Print the round summary and, in daily mode, record it.
fn finish_round(round: &Round, stats: &mut Stats, store: &StatsStore) {
    print_round_end(round);

    // Share-friendly result grid
    println!();
    for row in round.rows() {
        println!("   {}", row.feedback.to_emoji());
    }
    println!();

    if round.mode().records_stats()
        && let Some(outcome) = round.outcome()
    {
        *stats = stats.record(outcome, Local::now().date_naive());
        store.save(stats);
        print_stats(stats);
    }
}

fn print_daily_countdown() {
    let now = Local::now().naive_local();
    let seconds = (selector::next_rollover(now) - now).num_seconds();
    println!("⏳ Próxima palabra en {}\n", format_countdown(seconds));
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
