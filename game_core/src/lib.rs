pub mod components;
pub mod config;
pub mod controller;
pub mod params;
pub mod presentation;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use params::*;
pub use presentation::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the deterministic Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &InputSnapshot,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. Move paddles that stay in bounds
    apply_paddle_intents(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions against the post-move position
    check_collisions(world, config, events);

    // 5. Check scoring (ball exited screen)
    check_scoring(world, config, score, events);
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let size = glam::Vec2::new(config.paddle_width, config.paddle_height);
    let paddle = Paddle::new(side, config.paddle_spawn(side), size, config.paddle_speed);
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity at the screen center
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let ball = Ball::new(config.ball_spawn(), config.ball_radius, config.ball_max_speed);
    world.spawn((ball,))
}

/// Put the ball and both paddles back where the match started
pub fn reset_entities(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset();
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.reset();
    }
}
