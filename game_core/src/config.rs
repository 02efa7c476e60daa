use std::time::Duration;

use glam::Vec2;
use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Rejected game configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("winning score must be at least 1")]
    ZeroWinScore,

    #[error("target frame rate must be at least 1")]
    ZeroFrameRate,

    #[error("paddle height {paddle_height} does not fit a screen of height {screen_height}")]
    PaddleTooTall {
        paddle_height: f32,
        screen_height: f32,
    },

    #[error("ball diameter {diameter} does not fit a screen of height {screen_height}")]
    BallTooLarge { diameter: f32, screen_height: f32 },

    #[error("paddles of width {paddle_width} with margin {margin} overlap on a screen of width {screen_width}")]
    PaddlesOverlap {
        paddle_width: f32,
        margin: f32,
        screen_width: f32,
    },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_max_speed: f32,
    pub win_score: u8,
    pub win_delay_ms: u64,
    pub target_fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_max_speed: Params::BALL_MAX_SPEED,
            win_score: Params::WIN_SCORE,
            win_delay_ms: Params::WIN_DELAY_MS,
            target_fps: Params::TARGET_FPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the configuration describes a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("screen width", self.screen_width),
            ("screen height", self.screen_height),
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
            ("paddle speed", self.paddle_speed),
            ("ball radius", self.ball_radius),
            ("ball max speed", self.ball_max_speed),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if !(self.paddle_margin.is_finite() && self.paddle_margin >= 0.0) {
            return Err(ConfigError::Negative {
                name: "paddle margin",
                value: self.paddle_margin,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        if self.paddle_height >= self.screen_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                screen_height: self.screen_height,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter >= self.screen_height {
            return Err(ConfigError::BallTooLarge {
                diameter,
                screen_height: self.screen_height,
            });
        }

        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.screen_width {
            return Err(ConfigError::PaddlesOverlap {
                paddle_width: self.paddle_width,
                margin: self.paddle_margin,
                screen_width: self.screen_width,
            });
        }

        Ok(())
    }

    /// Top-left spawn position of a paddle
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.screen_width - self.paddle_margin - self.paddle_width,
        };
        let y = self.screen_height / 2.0 - self.paddle_height / 2.0;
        Vec2::new(x, y)
    }

    /// Ball spawn position (screen center)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Lowest valid paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.screen_height - self.paddle_height
    }

    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }
}
