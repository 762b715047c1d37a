//! UI rendering for Flappy Nano.
//!
//! A read-only render sink: it receives `&GameSession` and draws the
//! playfield scaled onto terminal cells, plus the status bar, info panel and
//! the idle / game-over popups.

use super::game_common::{
    controls_line, create_game_layout, render_info_panel_frame, render_popup, render_status_bar,
};
use flappy_nano::game::{Collision, GamePhase, GameSession};
use flappy_nano::share::ShareMessage;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    /// Gap edge of a pipe, drawn lighter.
    PipeLip,
    Avatar,
}

/// Render the whole game screen.
pub fn render_game(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    share: Option<&ShareMessage>,
) {
    let layout = create_game_layout(frame, area, " Flappy Nano ", Color::Cyan, 22);

    render_playfield(frame, layout.content, session);
    render_status(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);

    match session.phase {
        GamePhase::Idle => render_idle_popup(frame, layout.content),
        GamePhase::Ended => render_game_over_popup(frame, layout.content, session, share),
        GamePhase::Running => {}
    }
}

/// Map the session onto a `cols` x `rows` grid.
///
/// Each cell samples the playfield at its center. The avatar always occupies
/// the cell containing its center, drawn over anything else.
pub fn rasterize(session: &GameSession, cols: usize, rows: usize) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![Cell::Sky; cols]; rows];
    if cols == 0 || rows == 0 {
        return grid;
    }

    let config = session.config();
    let x_scale = config.playfield_width / cols as f64;
    let y_scale = config.playfield_height / rows as f64;

    for obstacle in &session.obstacles {
        for col in 0..cols {
            let px = (col as f64 + 0.5) * x_scale;
            if px < obstacle.x || px >= obstacle.trailing_edge(config.obstacle_width) {
                continue;
            }
            for (row, line) in grid.iter_mut().enumerate() {
                let py = (row as f64 + 0.5) * y_scale;
                let in_top = py < obstacle.gap_top;
                let in_bottom = py > obstacle.gap_bottom;
                if in_top || in_bottom {
                    let lip = (in_top && py + y_scale >= obstacle.gap_top)
                        || (in_bottom && py - y_scale <= obstacle.gap_bottom);
                    line[col] = if lip { Cell::PipeLip } else { Cell::Pipe };
                }
            }
        }
    }

    let avatar_col = ((session.avatar.x / x_scale) as usize).min(cols - 1);
    let avatar_row = ((session.avatar.y.max(0.0) / y_scale) as usize).min(rows - 1);
    grid[avatar_row][avatar_col] = Cell::Avatar;

    grid
}

/// Avatar glyph by vertical velocity.
fn avatar_glyph(velocity: f64) -> &'static str {
    if velocity < -2.0 {
        "▲" // Rising
    } else if velocity > 4.0 {
        "▼" // Falling fast
    } else {
        "●"
    }
}

fn render_playfield(frame: &mut Frame, area: Rect, session: &GameSession) {
    let cols = area.width as usize;
    let rows = area.height as usize;
    if cols == 0 || rows == 0 {
        return;
    }

    let glyph = avatar_glyph(session.avatar.velocity);
    let avatar_style = if session.is_ended() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let lines: Vec<Line> = rasterize(session, cols, rows)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Cell::Sky => Span::raw(" "),
                    Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::PipeLip => Span::styled("▓", Style::default().fg(Color::LightGreen)),
                    Cell::Avatar => Span::styled(glyph, avatar_style),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, session: &GameSession) {
    match session.phase {
        GamePhase::Idle => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space/Click]", "Flap"), ("[Enter]", "Start"), ("[Q]", "Quit")],
        ),
        GamePhase::Running => render_status_bar(
            frame,
            area,
            &format!("Score : {}", session.score),
            Color::Green,
            &[("[Space/Click]", "Flap"), ("[Q]", "Quit")],
        ),
        GamePhase::Ended => render_status_bar(
            frame,
            area,
            &format!("Game over - Score : {}", session.score),
            Color::Red,
            &[("[R]", "Retry"), ("[S]", "Share"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let (phase_text, phase_color) = match session.phase {
        GamePhase::Idle => ("Ready", Color::Yellow),
        GamePhase::Running => ("Flying", Color::Green),
        GamePhase::Ended => ("Crashed", Color::Red),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", phase_text),
            Style::default()
                .fg(phase_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                session.obstacles.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Frame: ", label),
            Span::raw(session.frame_count.to_string()),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::raw(format!("{:+.1}", session.avatar.velocity)),
        ]),
    ];

    if let Some(cause) = session.collision {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            match cause {
                Collision::Ground => " Hit the ground",
                Collision::Obstacle => " Hit a pipe",
            },
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_idle_popup(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Flap through the gaps!",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        controls_line(&[("[Space/Click]", "Flap"), ("[Enter]", "Start")]),
    ];
    render_popup(frame, area, "FLAPPY NANO", Color::Yellow, lines);
}

fn render_game_over_popup(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    share: Option<&ShareMessage>,
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Score : {}", session.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(share) = share {
        lines.push(Line::from(Span::styled(
            share.text.clone(),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            share.intent_url.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    lines.push(controls_line(&[("[R]", "Retry"), ("[S]", "Share"), ("[Q]", "Quit")]));
    render_popup(frame, area, "GAME OVER", Color::Red, lines);
}
