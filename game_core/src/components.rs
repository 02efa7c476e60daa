use glam::Vec2;

/// Which half of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Banner text shown when this side wins the match
    pub fn win_text(self) -> &'static str {
        match self {
            Side::Left => "Left Player Won!",
            Side::Right => "Right Player Won!",
        }
    }
}

/// Vertical paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
    pub speed: f32,
    pub origin: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
            origin: pos,
        }
    }

    /// Shift the paddle one step. Bounds are the caller's responsibility.
    pub fn move_by(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.pos.y -= self.speed,
            Direction::Down => self.pos.y += self.speed,
        }
    }

    pub fn reset(&mut self) {
        self.pos = self.origin;
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Band test: is `y` within the paddle's vertical extent
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.pos.y && y <= self.pos.y + self.size.y
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Center
    pub vel: Vec2,
    pub radius: f32,
    pub max_speed: f32,
    pub origin: Vec2,
}

impl Ball {
    /// New ball at `pos`, serving right at full speed
    pub fn new(pos: Vec2, radius: f32, max_speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(max_speed, 0.0),
            radius,
            max_speed,
            origin: pos,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Back to center with the serve flipped toward the other side
    pub fn reset(&mut self) {
        self.pos = self.origin;
        self.vel.y = 0.0;
        self.vel.x = -self.vel.x;
    }
}

/// Movement intent for paddle, a snapshot of held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Paddle {
        Paddle::new(
            Side::Left,
            Vec2::new(10.0, 250.0),
            Vec2::new(20.0, 100.0),
            5.0,
        )
    }

    #[test]
    fn test_paddle_move_is_unchecked() {
        let mut p = paddle();
        p.pos.y = 0.0;
        p.move_by(Direction::Up);
        assert_eq!(p.pos.y, -5.0, "Paddle itself does not clamp");
        p.move_by(Direction::Down);
        p.move_by(Direction::Down);
        assert_eq!(p.pos.y, 5.0);
    }

    #[test]
    fn test_paddle_reset_restores_origin() {
        let mut p = paddle();
        p.move_by(Direction::Down);
        p.pos.x = 99.0;
        p.reset();
        assert_eq!(p.pos, Vec2::new(10.0, 250.0));
    }

    #[test]
    fn test_paddle_band_inclusive() {
        let p = paddle();
        assert!(p.spans_y(250.0));
        assert!(p.spans_y(350.0));
        assert!(!p.spans_y(249.9));
        assert!(!p.spans_y(350.1));
        assert_eq!(p.center_y(), 300.0);
        assert_eq!(p.right_edge(), 30.0);
    }

    #[test]
    fn test_ball_starts_serving_right() {
        let ball = Ball::new(Vec2::new(450.0, 300.0), 7.0, 6.0);
        assert_eq!(ball.vel, Vec2::new(6.0, 0.0));
        assert_eq!(ball.origin, ball.pos);
    }

    #[test]
    fn test_ball_advance_adds_velocity() {
        let mut ball = Ball::new(Vec2::new(450.0, 300.0), 7.0, 6.0);
        ball.vel.y = -2.5;
        ball.advance();
        assert_eq!(ball.pos, Vec2::new(456.0, 297.5));
    }

    #[test]
    fn test_ball_reset_alternates_serve() {
        let mut ball = Ball::new(Vec2::new(450.0, 300.0), 7.0, 6.0);
        ball.pos = Vec2::new(-3.0, 120.0);
        ball.vel = Vec2::new(-6.0, 4.2);

        ball.reset();
        assert_eq!(ball.pos, Vec2::new(450.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(6.0, 0.0));

        ball.reset();
        assert_eq!(ball.vel.x, -6.0, "Each reset flips the serve");
    }

    #[test]
    fn test_side_win_text() {
        assert_eq!(Side::Left.win_text(), "Left Player Won!");
        assert_eq!(Side::Right.win_text(), "Right Player Won!");
    }
}
