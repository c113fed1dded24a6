//! Brickfall - a Breakout simulation core
//!
//! Core modules:
//! - `sim`: Per-frame simulation (collisions, lives, win/lose transitions)
//! - `renderer`: Renderer-agnostic scene building
//! - `driver`: Fixed-cadence frame driver
//! - `settings`: Data-driven game configuration

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{EndNotice, FrameDriver};
pub use settings::{ConfigError, GameConfig};

/// Default game constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 960.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Distance from the arena bottom to the ball's spawn centre
    pub const BALL_SPAWN_BOTTOM_OFFSET: f32 = 35.0;
    /// Base velocity, units per frame
    pub const BALL_BASE_DX: f32 = 2.0;
    pub const BALL_BASE_DY: f32 = -2.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 3.0;
    pub const PADDLE_BOTTOM_OFFSET: f32 = -10.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 10;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 4.0;

    pub const STARTING_LIVES: u8 = 3;

    /// Simulation frames per second consumed by the frame driver
    pub const FRAME_RATE: f32 = 90.0;
    /// Maximum frames per driver advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    pub const DEFAULT_COLOR: &str = "#0095dd";
}
