//! Block Breaker - a paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, screen state machine)
//! - `render`: Backend-agnostic drawing of each screen onto a `Canvas`
//! - `app`: Frame driver (update -> draw once per frame)
//! - `settings`: Data-driven configuration

pub mod app;
pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use app::App;
pub use highscores::HighScores;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield tiling (the field is a square of 30 x 30 tiles)
    pub const TILE_SIZE: f32 = 30.0;
    pub const TILE_AMOUNT: f32 = 30.0;

    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: f32 = TILE_SIZE * TILE_AMOUNT;
    pub const SCREEN_HEIGHT: f32 = TILE_SIZE * TILE_AMOUNT;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = TILE_SIZE * 4.0;
    pub const PADDLE_HEIGHT: f32 = TILE_SIZE / 2.0;
    /// Gap between paddle bottom and screen bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Horizontal speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 360.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch speed per axis (pixels/s)
    pub const BALL_SPEED: f32 = 480.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_TOP_OFFSET: f32 = 60.0;
    /// Score awarded per destroyed brick
    pub const BRICK_POINTS: u64 = 10;

    /// Fixed simulation timestep (120 Hz keeps a ball step well under the
    /// paddle and brick contact bands)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 12;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    pub const TARGET_FPS: u32 = 60;
}
