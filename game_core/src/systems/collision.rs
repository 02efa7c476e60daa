use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;
use tracing::debug;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config) {
            events.ball_hit_wall = true;
        }

        // Only the paddle the ball is travelling toward can be hit
        let target = if ball.vel.x < 0.0 {
            Side::Left
        } else {
            Side::Right
        };
        if let Some(paddle) = paddles.iter().find(|p| p.side == target) {
            if bounce_off_paddle(ball, paddle) {
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Top and bottom walls are tested independently; touching both flips twice.
fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    let mut hit = false;
    if ball.pos.y + ball.radius >= config.screen_height {
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    if ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    hit
}

fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !paddle.spans_y(ball.pos.y) {
        return false;
    }

    let touching = match paddle.side {
        Side::Left => ball.pos.x - ball.radius <= paddle.right_edge(),
        Side::Right => ball.pos.x + ball.radius >= paddle.pos.x,
    };
    if !touching {
        return false;
    }

    ball.vel.x = -ball.vel.x;

    // Offset from the paddle center maps linearly onto [-max, max]
    let difference_in_y = paddle.center_y() - ball.pos.y;
    let reduction_factor = (paddle.size.y / 2.0) / ball.max_speed;
    ball.vel.y = -1.0 * (difference_in_y / reduction_factor);

    debug!(
        side = ?paddle.side,
        offset = -difference_in_y,
        y_vel = ball.vel.y,
        "ball hit paddle"
    );
    true
}
