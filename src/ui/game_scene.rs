//! Terminal rendering for a game session.
//!
//! The world (400 x 600) is drawn on a half-block canvas so every terminal
//! cell holds two roughly square pixels, then scaled into the largest
//! centred area with the world's aspect ratio.

use crate::constants::{BIRD_FRAMES, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::{Rect as WorldRect, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Painter, Shape},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};

const SKY: Color = Color::Rgb(135, 206, 235);
const PIPE_TOP: Color = Color::Rgb(0, 200, 0);
const PIPE_BOTTOM: Color = Color::Rgb(0, 180, 0);
const PARTICLE: Color = Color::White;

/// Bird colour for an animation frame; each frame is a little darker.
pub fn bird_color(frame_index: usize) -> Color {
    let i = (frame_index % BIRD_FRAMES) as u8;
    Color::Rgb(255 - i * 50, 200 - i * 30, 0)
}

/// Solid world-space rectangle. Canvas `Rectangle` only draws outlines.
struct FilledRect {
    rect: WorldRect,
    color: Color,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let left = self.rect.left().max(0.0);
        let right = self.rect.right().min(SCREEN_WIDTH);
        let top = self.rect.top().max(0.0);
        let bottom = self.rect.bottom().min(SCREEN_HEIGHT);
        if left >= right || top >= bottom {
            return;
        }

        // Right and bottom edges are exclusive
        const INSET: f64 = 1e-6;
        let Some((x0, y0)) = painter.get_point(left, to_canvas_y(top)) else {
            return;
        };
        let Some((x1, y1)) = painter.get_point(right - INSET, to_canvas_y(bottom - INSET)) else {
            return;
        };

        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                painter.paint(x, y, self.color);
            }
        }
    }
}

/// World `y` grows downward; canvas `y` grows upward.
fn to_canvas_y(y: f64) -> f64 {
    SCREEN_HEIGHT - y
}

/// Largest area inside `area` with the world's aspect ratio, centred.
///
/// With half-block pixels one column is one pixel wide and one row is two
/// pixels tall, so the width in columns is 4/3 of the height in rows.
pub fn fit_viewport(area: Rect) -> Rect {
    let ratio = SCREEN_WIDTH / (SCREEN_HEIGHT / 2.0);
    let mut height = area.height;
    let mut width = (height as f64 * ratio).round() as u16;
    if width > area.width {
        width = area.width;
        height = (width as f64 / ratio).round() as u16;
    }
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the full game screen: bordered play field plus a controls line.
pub fn render_game(frame: &mut Frame, area: Rect, session: &Session) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    render_play_area(frame, fit_viewport(chunks[0]), session);
    render_controls(frame, chunks[1]);
}

/// Draw background, pipes, bird, particles and the score overlay.
pub fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(SKY)
        .x_bounds([0.0, SCREEN_WIDTH])
        .y_bounds([0.0, SCREEN_HEIGHT])
        .paint(|ctx| {
            for pipe in &session.pipes {
                ctx.draw(&FilledRect {
                    rect: pipe.top_rect(),
                    color: PIPE_TOP,
                });
                ctx.draw(&FilledRect {
                    rect: pipe.bottom_rect(),
                    color: PIPE_BOTTOM,
                });
            }

            let bird = &session.bird;
            ctx.draw(&FilledRect {
                rect: bird.rect(),
                color: bird_color(bird.frame_index),
            });

            for particle in bird.trail.iter() {
                ctx.draw(&Circle {
                    x: particle.x,
                    y: to_canvas_y(particle.y),
                    radius: particle.size,
                    color: PARTICLE,
                });
            }
        });
    frame.render_widget(canvas, area);

    let score = Paragraph::new(Line::from(Span::styled(
        format!("Score: {}", session.score),
        Style::default()
            .fg(Color::White)
            .bg(SKY)
            .add_modifier(Modifier::BOLD),
    )));
    let overlay = Rect {
        x: area.x + 1.min(area.width.saturating_sub(1)),
        y: area.y,
        width: area.width.saturating_sub(1).max(1),
        height: 1,
    };
    frame.render_widget(score, overlay);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let controls = Line::from(vec![
        Span::styled("[Any key/Click]", Style::default().fg(Color::White)),
        Span::styled(" Flap  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Esc]", Style::default().fg(Color::White)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(controls).alignment(Alignment::Center), area);
}
