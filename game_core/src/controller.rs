use hecs::World;
use tracing::{debug, info};

use crate::components::{Ball, Paddle, Side};
use crate::config::{Config, ConfigError};
use crate::presentation::{Clock, GameStateSnapshot, Presentation};
use crate::resources::{Events, InputSnapshot, MatchPhase, Score};
use crate::{create_ball, create_paddle, reset_entities};

/// Owns one match: the entities, the score and the frame loop
pub struct MatchController {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub phase: MatchPhase,
    pub tick: u32,
}

impl MatchController {
    /// Build a match at kick-off, rejecting unplayable configurations
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, &config);

        debug!(?config, "match created");

        Ok(Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            phase: MatchPhase::Playing,
            tick: 0,
        })
    }

    /// Advance one frame. A winning frame keeps its score until `restart_match`.
    pub fn step(&mut self, input: &InputSnapshot) -> MatchPhase {
        self.tick = self.tick.wrapping_add(1);

        crate::step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            input,
        );

        self.phase = if let Some(winner) = self.score.has_winner(self.config.win_score) {
            info!(
                winner = ?winner,
                left = self.score.left,
                right = self.score.right,
                "match won"
            );
            MatchPhase::MatchWon(winner)
        } else if let Some(scorer) = self.events.scorer() {
            MatchPhase::PointScored(scorer)
        } else {
            MatchPhase::Playing
        };

        self.phase
    }

    /// Reset ball, paddles and score for a new match
    pub fn restart_match(&mut self) {
        reset_entities(&mut self.world);
        self.score.reset();
        self.events.clear();
        self.phase = MatchPhase::Playing;
        info!("match restarted");
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn snapshot(&self) -> GameStateSnapshot {
        let config = &self.config;
        let paddle_pos = |side| {
            self.paddle(side)
                .map_or_else(|| config.paddle_spawn(side), |p| p.pos)
        };

        GameStateSnapshot {
            screen: glam::Vec2::new(config.screen_width, config.screen_height),
            paddle_left: paddle_pos(Side::Left),
            paddle_right: paddle_pos(Side::Right),
            paddle_size: glam::Vec2::new(config.paddle_width, config.paddle_height),
            ball: self.ball().map_or_else(|| config.ball_spawn(), |b| b.pos),
            ball_radius: config.ball_radius,
            score_left: self.score.left,
            score_right: self.score.right,
        }
    }

    /// Run frames until the presentation asks to quit.
    ///
    /// Each frame: wait for the frame slot, draw the current state, poll quit
    /// and held keys, then simulate. A quit request lets the current frame
    /// finish and stops before the next one. All state is dropped on return.
    pub fn run<P, C>(&mut self, presentation: &mut P, clock: &mut C) -> Result<(), P::Error>
    where
        P: Presentation,
        C: Clock,
    {
        info!(fps = self.config.target_fps, "match loop started");

        let mut running = true;
        while running {
            clock.tick(self.config.target_fps);
            presentation.render(&self.snapshot())?;

            if presentation.poll_quit()? {
                running = false;
            }

            let input = presentation.poll_directions()?;
            if let MatchPhase::MatchWon(winner) = self.step(&input) {
                self.celebrate(winner, presentation, clock)?;
            }
        }

        info!(
            frames = self.tick,
            left = self.score.left,
            right = self.score.right,
            "match loop stopped"
        );
        Ok(())
    }

    /// Show the winning score and banner, freeze, then start over
    fn celebrate<P, C>(
        &mut self,
        winner: Side,
        presentation: &mut P,
        clock: &mut C,
    ) -> Result<(), P::Error>
    where
        P: Presentation,
        C: Clock,
    {
        presentation.render(&self.snapshot())?;
        presentation.render_banner(winner.win_text())?;
        clock.delay(self.config.win_delay());
        self.restart_match();
        Ok(())
    }
}
