//! Main menu: title banner, selectable entries, best-score footer.

use crate::scenes::menu::{MenuScene, MENU_ITEMS};
use crate::ui::common::render_status_bar;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

// Rows must stay equal-width so centered alignment lines up.
const TITLE_ART: [&str; 5] = [
    "█████  █       ███   ████ ",
    "█      █      █   █  █   █",
    "████   █      █████  ████ ",
    "█      █      █   █  █    ",
    "█      █████  █   █  █    ",
];

pub fn render_menu(frame: &mut Frame, area: Rect, menu: &MenuScene) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(7), // Banner + tagline
            Constraint::Min(7),    // Entries
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    render_banner(frame, chunks[0]);
    render_entries(frame, chunks[1], menu);
    render_status_bar(
        frame,
        chunks[2],
        &format!("Best: {}", menu.best),
        Color::Cyan,
        &[("[↑/↓]", "Move"), ("[Enter]", "Select"), ("[Esc]", "Quit")],
    );
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = TITLE_ART
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "mind the pipes",
        Style::default().fg(Color::DarkGray),
    )));

    let banner = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

fn render_entries(frame: &mut Frame, area: Rect, menu: &MenuScene) {
    let mut lines = vec![Line::from("")];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let is_selected = i == menu.selected;
        let marker = if is_selected { ">" } else { " " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        // Pad entries to one width so centering does not jitter.
        lines.push(Line::from(Span::styled(
            format!("{} {:<5}", marker, item),
            style,
        )));
        lines.push(Line::from(""));
    }

    let list = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(list, area);
}
