//! TUI rendering with ratatui
//!
//! The layout mirrors the game surface: guess grid, on-screen keyboard,
//! and a side panel with round info and messages. The statistics panel
//! replaces the main area when open.

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::game::{GuessRow, MAX_GUESSES, selector};
use crate::output::display::KEYBOARD_ROWS;
use crate::output::formatters::{create_progress_bar, format_countdown};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    if app.input_mode == InputMode::StatsView {
        render_stats(f, app, chunks[1]);
    } else {
        // Main content area - split horizontally
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Guess grid
                Constraint::Percentage(40), // Round info and messages
            ])
            .split(chunks[1]);

        render_board(f, app, main_chunks[0]);
        render_side_panel(f, app, main_chunks[1]);
    }

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🟩 PALABRA - {}", app.mode.title()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn feedback_style(feedback: LetterFeedback) -> Style {
    match feedback {
        LetterFeedback::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterFeedback::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterFeedback::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

fn scored_row_line(row: &GuessRow) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (&letter, feedback) in row.word.letters().iter().zip(row.feedback.iter()) {
        spans.push(Span::styled(
            format!(" {letter} "),
            feedback_style(feedback),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn typed_row_line(typed: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let letters: Vec<char> = typed.chars().collect();
    for slot in 0..WORD_LENGTH {
        let span = match letters.get(slot) {
            Some(letter) => Span::styled(
                format!(" {letter} "),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn blank_row_line() -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for _ in 0..WORD_LENGTH {
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app.round.rows().iter().map(scored_row_line).collect();

    if !app.round.is_over() && lines.len() < MAX_GUESSES {
        lines.push(typed_row_line(app.round.current_text()));
    }
    while lines.len() < MAX_GUESSES {
        lines.push(blank_row_line());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Tablero ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Round info
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_round_info(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_round_info(f: &mut Frame, app: &App, area: Rect) {
    let mut content = vec![Line::from(vec![
        Span::raw("Modo:    "),
        Span::styled(
            app.mode.title(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if app.mode.records_stats() {
        let day_number = selector::day_index(Local::now().date_naive()) + 1;
        content.push(Line::from(format!("Día:     {day_number}")));
    }

    let attempt = if app.round.is_over() {
        "Ronda terminada".to_string()
    } else {
        format!("Intento: {}/{MAX_GUESSES}", app.round.row_index() + 1)
    };
    content.push(Line::from(attempt));

    if app.mode.has_hints() {
        content.push(Line::from(format!(
            "Pistas:  {}/{WORD_LENGTH}",
            app.round.hints_given()
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Partida ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Mensajes ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = match app.round.keyboard().get(letter) {
                        Some(feedback) => feedback_style(feedback),
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Teclado ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut content = vec![
        Line::from(""),
        Line::from(format!("Jugadas:       {}", stats.games_played)),
        Line::from(vec![
            Span::raw("Victorias:     "),
            Span::styled(
                format!("{}%", stats.win_rate_percent()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Racha actual:  {}", stats.current_streak)),
        Line::from(format!("Mejor racha:   {}", stats.max_streak)),
        Line::from(""),
        Line::from(Span::styled(
            "Distribución",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (index, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max_count.max(1)), 20);
        content.push(Line::from(vec![
            Span::raw(format!("{}: ", index + 1)),
            Span::styled(bar, Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    if app.mode.records_stats() && app.round.is_over() {
        let now = Local::now().naive_local();
        let seconds = (selector::next_rollover(now) - now).num_seconds();
        content.push(Line::from(""));
        content.push(Line::from(format!(
            "⏳ Próxima palabra en {}",
            format_countdown(seconds)
        )));
    }

    let panel = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Estadísticas ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(panel, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Modo: {}", app.mode.title())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Jugadas: {} | Victorias: {}%",
        app.stats.games_played,
        app.stats.win_rate_percent()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Typing => {
            "Enter: enviar | ⌫: borrar | Tab: estadísticas | Ctrl-N: nueva | Esc: salir"
        }
        InputMode::RoundOver => "n: nueva ronda | Tab: estadísticas | q: salir",
        InputMode::StatsView => "Tab/Esc: volver | q: salir",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
