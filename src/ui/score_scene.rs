//! Standalone best-score display.

use crate::scenes::score::ScoreScene;
use crate::ui::common::render_status_bar;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_score(frame: &mut Frame, area: Rect, scene: &ScoreScene) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" High Score ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(inner);

    let lines = vec![
        Line::from(Span::styled(
            "Personal best",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            scene.best.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "pairs cleared",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let content_height = lines.len() as u16;
    let y_offset = chunks[0].y + chunks[0].height.saturating_sub(content_height) / 2;

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(
            chunks[0].x,
            y_offset,
            chunks[0].width,
            content_height.min(chunks[0].height),
        ),
    );

    render_status_bar(frame, chunks[1], "", Color::White, &[("[Esc]", "Back")]);
}
