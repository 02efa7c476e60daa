/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0; // pixels per frame
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side wall

    // Ball
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_MAX_SPEED: f32 = 6.0; // |x_vel|, pixels per frame

    // Match
    pub const WIN_SCORE: u8 = 10;
    pub const WIN_DELAY_MS: u64 = 5000;

    // Loop
    pub const TARGET_FPS: u32 = 60;
}
