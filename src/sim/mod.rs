//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One frame per `tick`, velocities in units per frame
//! - Stable iteration order (bricks column-major)
//! - No rendering, logging or platform dependencies

pub mod collision;
pub mod geometry;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{BrickOutcome, VerticalContact};
pub use geometry::{BounceAxis, Edges, Rect, bounce_axis, overlaps};
pub use input::{InputEvent, Key, apply_intent, handle_input};
pub use state::{
    Arena, Ball, Brick, BrickGrid, BrickStatus, GameEvent, GamePhase, GameState, InputIntent,
    Paddle,
};
pub use tick::tick;
