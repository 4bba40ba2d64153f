//! TUI application state and logic

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use crate::game::{GameMode, Round, RoundOutcome, Stats, target_for_mode};
use crate::storage::StatsStore;
use crate::wordbank::WordBank;

/// What the keyboard is currently driving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Letters go into the active guess row.
    Typing,
    /// The round has ended; only round-level commands work.
    RoundOver,
    /// The statistics panel is open.
    StatsView,
}

/// Application state
pub struct App<'a> {
    pub bank: &'a WordBank,
    pub mode: GameMode,
    pub round: Round,
    pub stats: Stats,
    pub store: StatsStore,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank, mode: GameMode, store: StatsStore) -> Self {
        let stats = store.load();
        let target = target_for_mode(bank, mode, Local::now().date_naive());

        let mut app = Self {
            bank,
            mode,
            round: Round::new(mode, target),
            stats,
            store,
            messages: Vec::new(),
            input_mode: InputMode::Typing,
            should_quit: false,
        };
        app.add_message(
            "¡Bienvenido! Adivina la palabra de cinco letras.",
            MessageStyle::Info,
        );
        if mode.has_hints() {
            app.add_message("Ctrl-P revela una letra cuando la necesites.", MessageStyle::Info);
        }
        app
    }

    /// Map a raw key character onto the game alphabet.
    ///
    /// ASCII letters are upper-cased and ñ maps to Ñ. Accented vowels are
    /// not typeable - the hidden word is always in normalized form.
    fn game_letter_from_key(c: char) -> Option<char> {
        if c.is_ascii_alphabetic() {
            Some(c.to_ascii_uppercase())
        } else if c == 'ñ' || c == 'Ñ' {
            Some('Ñ')
        } else {
            None
        }
    }

    pub fn handle_letter(&mut self, c: char) {
        if let Some(letter) = Self::game_letter_from_key(c) {
            self.round.push_letter(letter);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.round.delete_letter();
    }

    pub fn handle_submit(&mut self) {
        match self.round.submit(self.bank) {
            Ok(_) => {
                if let Some(outcome) = self.round.outcome() {
                    self.finish_round(outcome);
                }
            }
            Err(rejection) => self.add_message(&rejection.to_string(), MessageStyle::Error),
        }
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won { row } => {
                let celebration = match row {
                    1 => "🎯 ¡A la primera! ¡Increíble! 🌟",
                    2 => "🔥 ¡Magnífico! ¡En dos intentos! 🔥",
                    3 => "✨ ¡Espléndido! ¡En tres! ✨",
                    4 => "👏 ¡Muy bien! ¡En cuatro! 👏",
                    5 => "🎉 ¡Buen trabajo! ¡En cinco! 🎉",
                    _ => "😅 ¡Uf! ¡Por los pelos! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            RoundOutcome::Lost => {
                let reveal = self
                    .round
                    .reveal_answer()
                    .map(|answer| format!("La palabra era: {answer}"));
                if let Some(text) = reveal {
                    self.add_message(&text, MessageStyle::Error);
                }
            }
        }

        if self.mode.records_stats() {
            self.stats = self.stats.record(outcome, Local::now().date_naive());
            self.store.save(&self.stats);
            self.add_message(
                "Vuelve mañana por la siguiente palabra.",
                MessageStyle::Info,
            );
            self.input_mode = InputMode::StatsView;
        } else {
            self.add_message(
                "Pulsa 'n' para otra ronda o 'q' para salir.",
                MessageStyle::Info,
            );
            self.input_mode = InputMode::RoundOver;
        }
    }

    pub fn new_round(&mut self) {
        if self.mode.records_stats() && !self.round.is_over() {
            self.add_message(
                "La palabra del día es una sola: termina la ronda.",
                MessageStyle::Error,
            );
            return;
        }
        let target = target_for_mode(self.bank, self.mode, Local::now().date_naive());
        self.round = Round::new(self.mode, target);
        self.input_mode = InputMode::Typing;
        self.add_message("🔄 ¡Nueva ronda!", MessageStyle::Info);
    }

    pub fn request_hint(&mut self) {
        match self.round.hint() {
            Some(letter) => {
                let position = self.round.hints_given();
                let text = format!("💡 Pista: la letra {position} es '{letter}'");
                self.add_message(&text, MessageStyle::Info);
            }
            None => self.add_message("No hay pistas disponibles.", MessageStyle::Error),
        }
    }

    pub fn reveal_target(&mut self) {
        if self.round.is_over() {
            return;
        }
        let reveal = self
            .round
            .reveal_answer()
            .map(|answer| format!("🔎 La palabra es: {answer}"));
        match reveal {
            Some(text) => self.add_message(&text, MessageStyle::Info),
            None => self.add_message(
                "En modo diario no se puede revelar la palabra.",
                MessageStyle::Error,
            ),
        }
    }

    pub fn toggle_stats(&mut self) {
        self.input_mode = if self.input_mode == InputMode::StatsView {
            if self.round.is_over() {
                InputMode::RoundOver
            } else {
                InputMode::Typing
            }
        } else {
            InputMode::StatsView
        };
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_round();
                    }
                    KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.request_hint();
                    }
                    KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.reveal_target();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.toggle_stats();
                    }
                    KeyCode::Enter => {
                        app.handle_submit();
                    }
                    KeyCode::Backspace => {
                        app.handle_backspace();
                    }
                    KeyCode::Char(c) => {
                        app.handle_letter(c);
                    }
                    _ => {}
                },
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_round();
                    }
                    KeyCode::Tab => {
                        app.toggle_stats();
                    }
                    _ => {
                        // Round is over; other keys are ignored
                    }
                },
                InputMode::StatsView => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if app.round.is_over() => {
                        app.new_round();
                    }
                    KeyCode::Tab | KeyCode::Esc => {
                        app.toggle_stats();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
