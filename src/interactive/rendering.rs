//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, message log and an end-of-game dialog.

use super::app::{App, MessageStyle};
use crate::core::{EvaluatedTile, KeyboardKnowledge, LetterStatus};
use crate::game::{GameOutcome, RowState, RowView};
use crate::output::formatters::{KEYBOARD_ROWS, share_grid, status_rgb, tile_char};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let rows = app.config.rules().max_attempts() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(rows * 2 + 4), // Board
            Constraint::Length(5),         // Keyboard
            Constraint::Length(7),         // Messages
            Constraint::Length(1),         // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, &app.game.keyboard(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.game.outcome().is_terminal() {
        render_dialog(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD PUZZLE")
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

fn rgb(status: LetterStatus) -> Color {
    let (r, g, b) = status_rgb(status);
    Color::Rgb(r, g, b)
}

fn tile_span(tile: &EvaluatedTile, state: RowState) -> Span<'static> {
    let text = format!(" {} ", tile_char(tile));
    let style = match state {
        RowState::Completed => Style::default()
            .fg(Color::White)
            .bg(rgb(tile.status))
            .add_modifier(Modifier::BOLD),
        RowState::Active => Style::default()
            .fg(Color::White)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
        RowState::Future => Style::default().fg(Color::DarkGray).bg(Color::Black),
    };
    Span::styled(text, style)
}

fn row_line(row: &RowView) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.tiles.len() * 2);
    for (i, tile) in row.tiles.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(tile_span(tile, row.state));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let progress = game.active_attempt().map_or_else(String::new, |attempt| {
        format!(
            "Row {}/{} · {}/{} letters",
            game.active_index() + 1,
            game.rules().max_attempts(),
            attempt.len(),
            game.rules().word_length()
        )
    });
    let mut lines = vec![
        Line::from(Span::styled(progress, Style::default().fg(Color::DarkGray))),
        Line::from(""),
    ];
    for row in app.game.rows() {
        lines.push(row_line(&row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(board, area);
}

fn key_span(label: String, status: LetterStatus) -> Span<'static> {
    let style = match status {
        LetterStatus::Unknown => Style::default().fg(Color::White).bg(Color::DarkGray),
        known => Style::default().fg(Color::White).bg(rgb(known)),
    };
    Span::styled(label, style.add_modifier(Modifier::BOLD))
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardKnowledge, area: Rect) {
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len());
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = Vec::new();
        let last = i == KEYBOARD_ROWS.len() - 1;
        if last {
            spans.push(key_span(" ENTER ".to_string(), LetterStatus::Unknown));
            spans.push(Span::raw(" "));
        }
        for letter in row.chars() {
            spans.push(key_span(format!(" {letter} "), keyboard.get(letter)));
            spans.push(Span::raw(" "));
        }
        if last {
            spans.push(key_span(" ⌫ ".to_string(), LetterStatus::Unknown));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .title(" Keyboard ")
            .title_alignment(Alignment::Center),
    );
    f.render_widget(widget, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Ctrl-N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_dialog(f: &mut Frame, app: &App) {
    let game = &app.game;
    let (title, color, headline) = match game.outcome() {
        GameOutcome::Won => (
            " 🎉 CONGRATULATIONS! 🎉 ",
            Color::Green,
            format!("Solved in {}/{}", game.active_index(), game.rules().max_attempts()),
        ),
        _ => (
            " Out of attempts ",
            Color::Red,
            format!("The word was {}", game.secret()),
        ),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(share_grid(game).lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: play again | Esc: quit",
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16 + 2;
    let area = centered(f.area(), 40, height);

    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
