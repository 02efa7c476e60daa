use crate::{Ball, Config, Events, Score, Side};
use hecs::World;
use tracing::info;

/// Check if ball left the screen (scoring)
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Right
        } else if ball.pos.x > config.screen_width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        info!(
            scorer = ?scorer,
            left = score.left,
            right = score.right,
            "point scored"
        );

        ball.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world(pos: Vec2, vel: Vec2) -> (World, Config, Score, Events) {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_ball(&mut world, &config);
        {
            let mut ball = world.get::<&mut Ball>(entity).expect("ball exists");
            ball.pos = pos;
            ball.vel = vel;
        }
        (world, config, Score::new(), Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball exists")
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events) =
            setup_world(Vec2::new(-1.0, 300.0), Vec2::new(-6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events) =
            setup_world(Vec2::new(900.5, 300.0), Vec2::new(6.0, 1.0));

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events) =
            setup_world(Vec2::new(-1.0, 120.0), Vec2::new(-6.0, 2.5));

        check_scoring(&mut world, &config, &mut score, &mut events);

        let b = ball(&world);
        assert_eq!(b.pos, config.ball_spawn(), "Ball should reset to center");
        assert_eq!(b.vel.y, 0.0);
        assert_eq!(b.vel.x, 6.0, "Serve heads toward the side that conceded");
    }

    #[test]
    fn test_no_scoring_on_the_edges() {
        for x in [0.0, 900.0] {
            let (mut world, config, mut score, mut events) =
                setup_world(Vec2::new(x, 300.0), Vec2::new(6.0, 0.0));

            check_scoring(&mut world, &config, &mut score, &mut events);

            assert_eq!(score, Score::new(), "No score while x is within [0, width]");
            assert!(events.scorer().is_none());
        }
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events) =
            setup_world(Vec2::new(901.0, 300.0), Vec2::new(6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events);
        events.clear();

        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = 901.0;
        }
        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
