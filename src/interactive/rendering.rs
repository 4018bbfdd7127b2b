//! TUI rendering with ratatui
//!
//! Draws the guess grid, on-screen keyboard and status panels from a [`Snapshot`].

use super::app::{App, MessageStyle, Statistics};
use crate::core::LetterStatus;
use crate::game::{CellState, Outcome, Phase, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const NOTICE_TEXT: &str = "Not in word list";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if snapshot.phase == Phase::NotStarted {
        render_start_screen(f, chunks[1]);
    } else {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Board
                Constraint::Percentage(40), // Info
            ])
            .split(chunks[1]);

        render_board(f, snapshot, main_chunks[0]);
        render_info_panel(f, app, main_chunks[1]);
    }

    render_status(f, app, snapshot, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("SIXLE - Six-Letter Word Game")
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

fn render_start_screen(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from("Guess the hidden six-letter word in six tries."),
        Line::from(""),
        Line::from(vec![
            Span::styled(" A ", tile_style(LetterStatus::Correct)),
            Span::raw(" right letter, right spot"),
        ]),
        Line::from(vec![
            Span::styled(" B ", tile_style(LetterStatus::Present)),
            Span::raw(" in the word, wrong spot"),
        ]),
        Line::from(vec![
            Span::styled(" C ", tile_style(LetterStatus::Missing)),
            Span::raw(" not in the word"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" How to Play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let grid_height = u16::try_from(snapshot.grid.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(grid_height), // Grid
            Constraint::Length(5),           // Keyboard
            Constraint::Min(3),              // Notice / outcome
        ])
        .split(area);

    render_grid(f, snapshot, chunks[0]);
    render_keyboard(f, snapshot, chunks[1]);
    render_banner(f, snapshot, chunks[2]);
}

fn render_grid(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = snapshot
        .grid
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|cell| {
                    let text = format!(" {} ", cell.letter.unwrap_or('·'));
                    [Span::styled(text, cell_style(cell.state)), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = format!(" Attempt {}/{} ", snapshot.attempt, snapshot.grid.len());
    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = snapshot
        .keyboard
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&(letter, status)| Span::styled(format!(" {letter} "), key_style(status)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_banner(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let mut lines = Vec::new();

    if snapshot.invalid_word {
        lines.push(Line::from(Span::styled(
            NOTICE_TEXT,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(ref message) = snapshot.message {
        let color = match snapshot.phase {
            Phase::Finished(Outcome::Won) => Color::Green,
            _ => Color::Red,
        };
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(banner, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Distribution
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_distribution(f, &app.stats, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_distribution(f: &mut Frame, stats: &Statistics, area: Rect) {
    let max = stats
        .guess_distribution
        .iter()
        .skip(1)
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let lines: Vec<Line> = stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(attempts, &count)| {
            let bar_len = count * 16 / max;
            Line::from(vec![
                Span::raw(format!("{attempts}: ")),
                Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match snapshot.phase {
        Phase::NotStarted => "Enter: Start | Esc: Quit",
        Phase::InProgress => "Type letters | Enter: Submit | Ctrl-N: New | Esc: Quit",
        Phase::Finished(_) => "Ctrl-N: New Game | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

/// Background color for a scored status
const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Missing => Color::DarkGray,
        LetterStatus::Unguessed => Color::Reset,
    }
}

fn tile_style(status: LetterStatus) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(status_color(status))
        .add_modifier(Modifier::BOLD)
}

fn cell_style(state: CellState) -> Style {
    match state {
        CellState::Empty => Style::default().fg(Color::DarkGray),
        CellState::Pending => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        CellState::Scored(status) => tile_style(status),
    }
}

fn key_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Unguessed => Style::default().fg(Color::White),
        scored => tile_style(scored),
    }
}
