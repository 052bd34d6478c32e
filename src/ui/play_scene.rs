//! Playfield renderer: the logical field scaled onto the cell grid,
//! a stats panel, and the pause / countdown / crash overlays.

use crate::core::constants::{
    AVATAR_WIDTH, AVATAR_X, FIELD_HEIGHT, FIELD_WIDTH, SCORE_THRESHOLD_HARD,
    SCORE_THRESHOLD_NORMAL,
};
use crate::core::difficulty::Difficulty;
use crate::core::session::{Phase, Session};
use crate::scenes::play::{PauseMenu, PlayScene, PAUSE_ITEMS};
use crate::ui::common::{render_info_panel_frame, render_modal, render_status_bar};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_play(frame: &mut Frame, area: Rect, play: &PlayScene) {
    let session = &play.session;

    // The crash screen replaces everything until the auto-restart.
    if session.phase == Phase::GameOver {
        render_crash_overlay(frame, area, session);
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Field (left) | stats panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(inner);

    // Field on top, two status lines below
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_field(frame, v_chunks[0], session);
    render_status(frame, v_chunks[1], play);
    render_info_panel(frame, h_chunks[1], session);

    if let Some(count) = session.countdown {
        render_countdown(frame, v_chunks[0], count);
    }
    if let Some(menu) = &play.pause_menu {
        render_pause_menu(frame, v_chunks[0], menu);
    }
}

/// Rasterize the field: every terminal cell covers a small world
/// rectangle and shows whatever occupies it.
fn render_field(frame: &mut Frame, area: Rect, session: &Session) {
    let cols = area.width as usize;
    let rows = area.height as usize;
    if cols < 2 || rows < 2 {
        return;
    }

    let x_scale = FIELD_WIDTH / cols as f64;
    let y_scale = FIELD_HEIGHT / rows as f64;

    let mut lines: Vec<Line> = Vec::with_capacity(rows);
    for row in 0..rows {
        let cell_top = row as f64 * y_scale;
        let cell_bottom = cell_top + y_scale;
        let mut spans: Vec<Span> = Vec::with_capacity(cols);
        for col in 0..cols {
            let cell_left = col as f64 * x_scale;
            let cell_right = cell_left + x_scale;
            spans.push(field_cell(
                session,
                cell_left,
                cell_right,
                cell_top,
                cell_bottom,
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn field_cell(session: &Session, left: f64, right: f64, top: f64, bottom: f64) -> Span<'static> {
    // Avatar wins over columns so it never vanishes mid-overlap.
    let avatar = &session.avatar;
    let a_left = AVATAR_X - AVATAR_WIDTH / 2.0;
    let a_right = AVATAR_X + AVATAR_WIDTH / 2.0;
    if a_left < right && a_right > left && avatar.top() < bottom && avatar.bottom() > top {
        let glyph = if avatar.flap_timer > 0 || avatar.velocity < -60.0 {
            "▲"
        } else if avatar.velocity > 120.0 {
            "▼"
        } else {
            "►"
        };
        return Span::styled(
            glyph,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    }

    for pair in &session.obstacles {
        if pair.x < right && pair.right_edge() > left {
            // Upper column fills [0, upper_y]; the cell holding the
            // boundary renders as a shaded gap edge.
            if pair.upper_y > top {
                return if pair.upper_y < bottom {
                    Span::styled("░", Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled("█", Style::default().fg(Color::Green))
                };
            }
            // Lower column fills [lower_y, FIELD_HEIGHT].
            if pair.lower_y() < bottom {
                return if pair.lower_y() > top {
                    Span::styled("░", Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled("█", Style::default().fg(Color::Green))
                };
            }
        }
    }

    Span::raw(" ")
}

fn render_status(frame: &mut Frame, area: Rect, play: &PlayScene) {
    let session = &play.session;

    if play.pause_menu.is_some() {
        render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[↑/↓]", "Choose"), ("[Enter]", "Confirm")],
        );
        return;
    }

    if let Some(count) = session.countdown {
        render_status_bar(
            frame,
            area,
            &format!("Fly in: {}", count),
            Color::Yellow,
            &[],
        );
        return;
    }

    render_status_bar(
        frame,
        area,
        session.difficulty.name(),
        difficulty_color(session.difficulty),
        &[("[Space]", "Flap"), ("[Esc]", "Pause")],
    );
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Normal => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled("Score  ", label),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best   ", label),
            Span::styled(session.best.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Level  ", label),
            Span::styled(
                session.difficulty.name(),
                Style::default().fg(difficulty_color(session.difficulty)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed  ", label),
            Span::styled(
                format!("{:.0}", session.scroll_speed),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Next level", label)),
        progress_line(session),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Score progress toward the next difficulty threshold.
fn progress_line(session: &Session) -> Line<'static> {
    const BAR_WIDTH: usize = 14;

    let (start, end) = match session.difficulty {
        Difficulty::Easy => (0, SCORE_THRESHOLD_NORMAL),
        Difficulty::Normal => (SCORE_THRESHOLD_NORMAL, SCORE_THRESHOLD_HARD),
        Difficulty::Hard => {
            return Line::from(Span::styled("max", Style::default().fg(Color::Red)));
        }
    };

    let span = (end - start) as f64;
    let progress = (session.score.saturating_sub(start) as f64 / span).clamp(0.0, 1.0);
    let filled = (progress * BAR_WIDTH as f64).round() as usize;

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn render_countdown(frame: &mut Frame, area: Rect, count: u8) {
    let lines = vec![Line::from(Span::styled(
        format!("Fly in: {}", count),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    render_modal(frame, area, "", Color::Yellow, 15, 3, lines);
}

fn render_pause_menu(frame: &mut Frame, area: Rect, menu: &PauseMenu) {
    let mut lines = vec![Line::from("")];
    for (i, item) in PAUSE_ITEMS.iter().enumerate() {
        let is_selected = i == menu.selected;
        let marker = if is_selected { ">" } else { " " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {:<8}", marker, item),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Select",
        Style::default().fg(Color::DarkGray),
    )));

    render_modal(frame, area, " Paused ", Color::Yellow, 26, 7, lines);
}

fn render_crash_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    frame.render_widget(Clear, area);

    // Best is written through during play, so a run that set a record
    // ends with score == best.
    let new_best = session.score > 0 && session.score == session.best;
    let title_color = if new_best { Color::Green } else { Color::Red };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let best_line = if new_best {
        Line::from(Span::styled(
            format!("New best: {}!", session.best),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("Best: {}", session.best),
            Style::default().fg(Color::Cyan),
        ))
    };

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", session.score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        best_line,
        Line::from(""),
        Line::from(Span::styled(
            "Restarting...",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let content_height = lines.len() as u16;
    let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(
            inner.x,
            y_offset,
            inner.width,
            content_height.min(inner.height),
        ),
    );
}
