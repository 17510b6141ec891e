/// Game tuning parameters for Flappy Learn
///
/// Lengths are pixels, velocities are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 768.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Bird
    pub const BIRD_SIZE: f32 = 50.0;
    pub const BIRD_START_Y: f32 = 200.0;
    pub const GRAVITY: f32 = 0.45;
    pub const JUMP_IMPULSE: f32 = -8.0;
    pub const MAX_RISE_VELOCITY: f32 = -11.0;
    pub const MAX_FALL_VELOCITY: f32 = 12.0;

    // Pipes
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_SPEED: f32 = 3.0;
    pub const PIPE_SPACING: f32 = 300.0;
    pub const GAP_MARGIN: f32 = 50.0;
    pub const MIN_PIPES: usize = 3;

    // Rendering
    pub const ROTATION_PER_VELOCITY: f32 = 4.0; // degrees per px/tick
    pub const MIN_ROTATION_DEG: f32 = -30.0;
    pub const MAX_ROTATION_DEG: f32 = 90.0;

    // Quiz
    pub const CORRECT_REVEAL_MS: u32 = 1500;
    pub const WRONG_REVEAL_MS: u32 = 3000;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // one tick, ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps

    /// localStorage key for the persisted high score
    pub const HIGH_SCORE_KEY: &'static str = "flappyLearnHighScore";
}
