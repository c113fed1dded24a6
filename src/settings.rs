//! Game configuration
//!
//! Every tuning value of a session lives here. Loaded from JSON; missing
//! fields fall back to the defaults in [`crate::consts`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("invalid color {value:?} for {field}")]
    Color { field: &'static str, value: String },
}

/// Colors used by the scene builder, as `#rrggbb` or `#rrggbbaa` strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub ball: String,
    pub paddle: String,
    pub brick: String,
    pub score: String,
    pub lives: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            ball: DEFAULT_COLOR.to_string(),
            paddle: DEFAULT_COLOR.to_string(),
            brick: DEFAULT_COLOR.to_string(),
            score: DEFAULT_COLOR.to_string(),
            lives: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` into RGBA components in `0.0..=1.0`
pub fn parse_hex_color(value: &str) -> Option<[f32; 4]> {
    let hex = value.strip_prefix('#')?;
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|c| c as f32 / 255.0)
    };

    let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
    Some([channel(0)?, channel(2)?, channel(4)?, alpha])
}

/// Parse one palette entry, naming the field on failure
pub(crate) fn parse_color(field: &'static str, value: &str) -> Result<[f32; 4], ConfigError> {
    parse_hex_color(value).ok_or_else(|| ConfigError::Color {
        field,
        value: value.to_string(),
    })
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Spawn centre sits this far above the arena bottom
    pub ball_spawn_bottom_offset: f32,
    pub ball_base_dx: f32,
    pub ball_base_dy: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Added to `arena_height - paddle_height` to place the paddle
    pub paddle_bottom_offset: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    pub starting_lives: u8,

    // === Frame driver ===
    /// Simulation frames per second
    pub frame_rate: f32,
    pub max_substeps: u32,

    pub palette: Palette,
}

impl Palette {
    /// Check that every entry parses as a color
    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("background", &self.background),
            ("ball", &self.ball),
            ("paddle", &self.paddle),
            ("brick", &self.brick),
            ("score", &self.score),
            ("lives", &self.lives),
        ];
        for (field, value) in entries {
            parse_color(field, value)?;
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_spawn_bottom_offset: BALL_SPAWN_BOTTOM_OFFSET,
            ball_base_dx: BALL_BASE_DX,
            ball_base_dy: BALL_BASE_DY,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            starting_lives: STARTING_LIVES,

            frame_rate: FRAME_RATE,
            max_substeps: MAX_SUBSTEPS,

            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Brick width, sized so the grid spans the arena width with the left
    /// offset mirrored on the right
    pub fn brick_width(&self) -> f32 {
        let columns = self.brick_columns as f32;
        (self.arena_width
            - 2.0 * self.brick_offset_left
            - self.brick_padding * (columns - 1.0))
            / columns
    }

    /// Number of bricks that must be destroyed to win
    pub fn brick_count(&self) -> u32 {
        self.brick_rows * self.brick_columns
    }

    /// Fixed y of the paddle's top edge
    pub fn paddle_y(&self) -> f32 {
        self.arena_height - self.paddle_height + self.paddle_bottom_offset
    }

    /// Largest paddle x that keeps the paddle inside the arena
    pub fn paddle_max_x(&self) -> f32 {
        self.arena_width - self.paddle_width
    }

    /// Simulation timestep in seconds
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("brick_height", self.brick_height),
            ("frame_rate", self.frame_rate),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let finite = [
            ("ball_spawn_bottom_offset", self.ball_spawn_bottom_offset),
            ("ball_base_dx", self.ball_base_dx),
            ("ball_base_dy", self.ball_base_dy),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if !self.paddle_speed.is_finite() || self.paddle_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "paddle_speed must be zero or positive, got {}",
                self.paddle_speed
            )));
        }
        if 2.0 * self.ball_radius >= self.arena_width {
            return Err(ConfigError::Invalid(format!(
                "ball_radius {} does not fit in arena_width {}",
                self.ball_radius, self.arena_width
            )));
        }
        // Spawned ball must sit fully inside the arena
        let spawn_y = self.arena_height - self.ball_spawn_bottom_offset;
        if spawn_y < self.ball_radius || spawn_y > self.arena_height - self.ball_radius {
            return Err(ConfigError::Invalid(format!(
                "ball_spawn_bottom_offset {} places the ball outside the arena",
                self.ball_spawn_bottom_offset
            )));
        }

        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(ConfigError::Invalid(
                "brick grid needs at least one row and one column".to_string(),
            ));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid(
                "starting_lives must be at least 1".to_string(),
            ));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::Invalid(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        if self.paddle_width > self.arena_width {
            return Err(ConfigError::Invalid(format!(
                "paddle_width {} exceeds arena_width {}",
                self.paddle_width, self.arena_width
            )));
        }
        if self.brick_width() <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{} columns do not fit in arena_width {}",
                self.brick_columns, self.arena_width
            )));
        }

        self.palette.validate()?;

        Ok(())
    }
}
