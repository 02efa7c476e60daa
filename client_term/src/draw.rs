//! Frame drawing: court, paddles, ball, scores and the win banner

use game_core::GameStateSnapshot;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Rectangle};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

pub const TITLE: &str = " Ping n Pong! ";

/// Gap between the top of the court and the center line
const CENTER_LINE_TOP: f64 = 10.0;

/// Draw the court for one snapshot.
///
/// Screen coordinates grow downward; the canvas grows upward, so every y is
/// flipped against the screen height.
pub fn draw_field(frame: &mut Frame, snapshot: &GameStateSnapshot) {
    let width = f64::from(snapshot.screen.x);
    let height = f64::from(snapshot.screen.y);
    let flip = |y: f32| height - f64::from(y);

    let canvas = Canvas::default()
        .block(Block::bordered().title(TITLE))
        .background_color(Color::Black)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            ctx.draw(&CanvasLine {
                x1: width / 2.0,
                y1: height - CENTER_LINE_TOP,
                x2: width / 2.0,
                y2: 0.0,
                color: Color::Gray,
            });

            for paddle in [snapshot.paddle_left, snapshot.paddle_right] {
                ctx.draw(&Rectangle {
                    x: f64::from(paddle.x),
                    y: flip(paddle.y + snapshot.paddle_size.y),
                    width: f64::from(snapshot.paddle_size.x),
                    height: f64::from(snapshot.paddle_size.y),
                    color: Color::White,
                });
            }

            ctx.draw(&Circle {
                x: f64::from(snapshot.ball.x),
                y: flip(snapshot.ball.y),
                radius: f64::from(snapshot.ball_radius),
                color: Color::White,
            });

            ctx.print(
                width / 4.0,
                height - 20.0,
                snapshot.score_left.to_string().bold(),
            );
            ctx.print(
                width * 3.0 / 4.0,
                height - 20.0,
                snapshot.score_right.to_string().bold(),
            );
        });

    frame.render_widget(canvas, frame.area());
}

/// Overlay a centered message on whatever is already drawn
pub fn draw_banner(frame: &mut Frame, text: &str) {
    let width = u16::try_from(text.chars().count() + 4).unwrap_or(u16::MAX);
    let area = centered(frame.area(), width, 3);

    let banner = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Black).bold())
        .block(Block::bordered());

    frame.render_widget(Clear, area);
    frame.render_widget(banner, area);
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
