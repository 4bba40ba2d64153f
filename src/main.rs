//! Palabra - CLI
//!
//! A Spanish daily word-guessing game for the terminal, with a full TUI and
//! a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use palabra::{
    commands::{run_simple, run_stats},
    game::GameMode,
    interactive::{App, run_tui},
    storage::StatsStore,
    wordbank::{WordBank, loader::read_word_lines},
};

#[derive(Parser)]
#[command(
    name = "palabra",
    about = "Juego de palabras: adivina la palabra de cinco letras en seis intentos",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: daily (default), practice, or tutorial
    #[arg(short, long, global = true, default_value = "daily")]
    mode: String,

    /// Path to a custom target word list (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based CLI mode (no TUI)
    Simple,

    /// Show the saved statistics and the time until the next daily word
    Stats,
}

/// Build the word bank, honoring the `-w` flag
///
/// A custom list replaces the targets only; the extended guess list and the
/// tutorial pool stay embedded.
fn load_bank(wordlist: Option<&str>) -> Result<WordBank> {
    match wordlist {
        None => Ok(WordBank::embedded()),
        Some(path) => {
            let raw = read_word_lines(path)
                .with_context(|| format!("cannot read word list '{path}'"))?;
            Ok(WordBank::with_custom_targets(&raw))
        }
    }
}

fn main() -> Result<()> {
    // Default to warnings only so game output stays clean; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let bank = load_bank(cli.wordlist.as_deref())?;
    let mode = GameMode::from_name(&cli.mode);
    let store = StatsStore::open_default();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(&bank, mode, store)),
        Commands::Simple => run_simple(&bank, mode, &store).map_err(|e| anyhow::anyhow!(e)),
        Commands::Stats => {
            run_stats(&store);
            Ok(())
        }
    }
}
