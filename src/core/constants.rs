// Field geometry (logical units; the renderer scales to terminal cells)
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

// Obstacles
pub const OBSTACLE_PAIRS: usize = 4;
pub const OBSTACLE_WIDTH: f64 = 52.0;
// Minimum inset between a gap and the top/bottom field edge
pub const EDGE_MARGIN: i32 = 40;

// Avatar
pub const AVATAR_X: f64 = FIELD_WIDTH / 10.0;
pub const AVATAR_START_Y: f64 = FIELD_HEIGHT / 2.0;
pub const AVATAR_WIDTH: f64 = 34.0;
pub const AVATAR_HEIGHT: f64 = 24.0;

// Physics (units/second)
pub const GRAVITY: f64 = 1000.0;
pub const FLAP_IMPULSE: f64 = 300.0;

// Timing
pub const PHYSICS_TICK_MS: u64 = 16;
pub const MAX_FRAME_DT_MS: u64 = 100;

// Pause countdown and restart
pub const COUNTDOWN_START: u8 = 3;
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;
pub const RESTART_DELAY_MS: u64 = 1000;

// Difficulty thresholds (cumulative score)
pub const SCORE_THRESHOLD_NORMAL: u32 = 10;
pub const SCORE_THRESHOLD_HARD: u32 = 20;

// High-score persistence
pub const HIGH_SCORE_KEY: &str = "highScore";

// Flap animation duration in physics ticks (6 ticks x 16ms ~ 96ms)
pub const FLAP_ANIM_TICKS: u32 = 6;
