use hecs::World;
use tracing::trace;

use crate::components::*;
use crate::config::Config;
use crate::resources::*;

/// Copy the frame's held keys onto each paddle's intent
pub fn ingest_inputs(world: &mut World, input: &InputSnapshot) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = match paddle.side {
            Side::Left => PaddleIntent {
                up: input.left_up,
                down: input.left_down,
            },
            Side::Right => PaddleIntent {
                up: input.right_up,
                down: input.right_down,
            },
        };
    }
}

/// Apply paddle intents, moving only when the result stays on screen
pub fn apply_paddle_intents(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up && paddle.pos.y - paddle.speed >= 0.0 {
            paddle.move_by(Direction::Up);
        }
        if intent.down && paddle.pos.y + paddle.speed + paddle.size.y <= config.screen_height {
            paddle.move_by(Direction::Down);
        }
        if intent.up || intent.down {
            trace!(side = ?paddle.side, y = paddle.pos.y, "paddle input");
        }
    }
}
