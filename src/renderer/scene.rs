//! Scene building
//!
//! Turns a [`GameState`] into a renderer-agnostic description of one frame:
//! a clear color, a triangle list and the HUD labels.

use glam::Vec2;

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::Vertex;
use crate::settings::{ConfigError, GameConfig, Palette, parse_color};
use crate::sim::GameState;

/// HUD font size in pixels
pub const HUD_FONT_SIZE: f32 = 16.0;
/// Score label anchor
pub const SCORE_LABEL_POS: Vec2 = Vec2::new(8.0, 20.0);
/// Lives label sits this far left of the arena's right edge
pub const LIVES_LABEL_INSET: f32 = 65.0;

/// A line of HUD text, anchored at its baseline start
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub labels: Vec<Label>,
}

impl Scene {
    /// Vertex data ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Palette resolved to linear RGBA
#[derive(Debug, Clone, Copy, PartialEq)]
struct Colors {
    background: [f32; 4],
    ball: [f32; 4],
    paddle: [f32; 4],
    brick: [f32; 4],
    score: [f32; 4],
    lives: [f32; 4],
}

impl Colors {
    fn resolve(palette: &Palette) -> Result<Self, ConfigError> {
        let parse = parse_color;
        Ok(Self {
            background: parse("background", &palette.background)?,
            ball: parse("ball", &palette.ball)?,
            paddle: parse("paddle", &palette.paddle)?,
            brick: parse("brick", &palette.brick)?,
            score: parse("score", &palette.score)?,
            lives: parse("lives", &palette.lives)?,
        })
    }
}

/// Builds scenes with a fixed palette
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    colors: Colors,
}

impl SceneBuilder {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            colors: Colors::resolve(&config.palette)?,
        })
    }

    /// Describe the current frame. Destroyed bricks are skipped.
    pub fn build(&self, state: &GameState) -> Scene {
        let colors = &self.colors;
        let alive = state.bricks.alive_count();
        let mut vertices =
            Vec::with_capacity((CIRCLE_SEGMENTS as usize) * 3 + 6 + alive * 6);

        vertices.extend(shapes::circle(
            state.ball.pos,
            state.ball.radius,
            colors.ball,
            CIRCLE_SEGMENTS,
        ));
        vertices.extend(shapes::rect(&state.paddle.rect(), colors.paddle));
        for brick in state.bricks.bricks.iter().filter(|b| b.is_alive()) {
            vertices.extend(shapes::rect(&state.bricks.rect(brick), colors.brick));
        }

        let labels = vec![
            Label {
                text: format!("Score: {}", state.score),
                pos: SCORE_LABEL_POS,
                size: HUD_FONT_SIZE,
                color: colors.score,
            },
            Label {
                text: format!("Lives: {}", state.lives),
                pos: Vec2::new(state.arena.width - LIVES_LABEL_INSET, SCORE_LABEL_POS.y),
                size: HUD_FONT_SIZE,
                color: colors.lives,
            },
        ];

        Scene {
            width: state.arena.width,
            height: state.arena.height,
            clear_color: colors.background,
            vertices,
            labels,
        }
    }
}
