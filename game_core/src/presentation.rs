//! Contracts between the simulation and whatever draws it.
//!
//! The core never touches a terminal, window or wall clock directly. A front
//! end implements [`Presentation`] to feed input and draw frames, and a
//! [`Clock`] paces the loop. [`SystemClock`] is the real-time clock.

use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;

use crate::resources::InputSnapshot;

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameStateSnapshot {
    pub screen: Vec2,
    pub paddle_left: Vec2, // Top-left corners
    pub paddle_right: Vec2,
    pub paddle_size: Vec2,
    pub ball: Vec2,
    pub ball_radius: f32,
    pub score_left: u8,
    pub score_right: u8,
}

/// Input source and renderer driven by the match loop
pub trait Presentation {
    type Error;

    /// True once the player asked to close the game
    fn poll_quit(&mut self) -> Result<bool, Self::Error>;

    /// Movement keys held during this frame
    fn poll_directions(&mut self) -> Result<InputSnapshot, Self::Error>;

    fn render(&mut self, snapshot: &GameStateSnapshot) -> Result<(), Self::Error>;

    /// Draw a message over the last rendered frame
    fn render_banner(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Frame pacing and blocking delays
pub trait Clock {
    /// Block until the next frame at `target_fps` is due
    fn tick(&mut self, target_fps: u32);

    fn delay(&mut self, duration: Duration);
}

/// Wall-clock frame limiter
#[derive(Debug, Default)]
pub struct SystemClock {
    last_tick: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn tick(&mut self, target_fps: u32) {
        let frame = Duration::from_secs(1) / target_fps.max(1);
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }

    fn delay(&mut self, duration: Duration) {
        thread::sleep(duration);
        // The freeze is not frame time
        self.last_tick = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_does_not_block() {
        let mut clock = SystemClock::new();
        let start = Instant::now();
        clock.tick(1);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_tick_caps_frame_rate() {
        let mut clock = SystemClock::new();
        clock.tick(50);
        let start = Instant::now();
        clock.tick(50);
        clock.tick(50);
        assert!(
            start.elapsed() >= Duration::from_millis(39),
            "Two frames at 50 fps take at least 40ms, took {:?}",
            start.elapsed()
        );
    }

    #[test]
    fn test_delay_blocks() {
        let mut clock = SystemClock::new();
        let start = Instant::now();
        clock.delay(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
