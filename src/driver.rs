//! Frame driver
//!
//! Converts wall-clock time from the host into simulation frames at the
//! configured frame rate, presents a scene after every frame and stops once
//! the session reaches a terminal phase.

use crate::renderer::{Renderer, SceneBuilder};
use crate::settings::{ConfigError, GameConfig};
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Longest wall-clock gap accepted per advance (seconds)
pub const MAX_FRAME_TIME: f32 = 0.1;

/// End-of-session notice for the host. The host discards the session and
/// creates a new [`GameState`] to play again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndNotice {
    pub phase: GamePhase,
    pub message: &'static str,
    pub score: u32,
    pub frames: u64,
}

impl EndNotice {
    /// Notice for a terminal session, `None` while still playing
    pub fn from_state(state: &GameState) -> Option<Self> {
        state.phase.notice().map(|message| Self {
            phase: state.phase,
            message,
            score: state.score,
            frames: state.frame,
        })
    }
}

/// Fixed-cadence driver for one session at a time
#[derive(Debug, Clone)]
pub struct FrameDriver {
    frame_dt: f32,
    max_substeps: u32,
    accumulator: f32,
    scenes: SceneBuilder,
}

impl FrameDriver {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            frame_dt: config.frame_dt(),
            max_substeps: config.max_substeps,
            accumulator: 0.0,
            scenes: SceneBuilder::new(config)?,
        })
    }

    /// Seconds per simulation frame
    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }

    /// Unsimulated time carried to the next advance
    pub fn backlog(&self) -> f32 {
        self.accumulator
    }

    /// Run as many frames as `elapsed` seconds cover.
    ///
    /// Returns the end notice as soon as the session ends; a session that has
    /// already ended is never ticked again.
    pub fn advance<R: Renderer>(
        &mut self,
        state: &mut GameState,
        elapsed: f32,
        renderer: &mut R,
    ) -> Option<EndNotice> {
        if let Some(notice) = EndNotice::from_state(state) {
            return Some(notice);
        }

        // NaN or infinite host time counts as no time
        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= self.frame_dt && substeps < self.max_substeps {
            self.accumulator -= self.frame_dt;
            substeps += 1;

            if let Some(notice) = self.step(state, renderer) {
                self.accumulator = 0.0;
                return Some(notice);
            }
        }

        // Drop any backlog the substep cap left behind
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.frame_dt);
        }

        None
    }

    /// Run exactly one frame and present it
    pub fn step<R: Renderer>(
        &mut self,
        state: &mut GameState,
        renderer: &mut R,
    ) -> Option<EndNotice> {
        tick(state);
        for event in state.drain_events() {
            log_event(state, event);
        }
        renderer.present(&self.scenes.build(state));
        EndNotice::from_state(state)
    }
}

fn log_event(state: &GameState, event: GameEvent) {
    match event {
        GameEvent::BrickDestroyed { column, row } => log::debug!(
            "Frame {}: brick ({}, {}) destroyed, score {}",
            state.frame,
            column,
            row,
            state.score
        ),
        GameEvent::PaddleHit => log::trace!("Frame {}: paddle hit", state.frame),
        GameEvent::WallBounce | GameEvent::CeilingBounce => {
            log::trace!("Frame {}: {:?}", state.frame, event)
        }
        GameEvent::LifeLost { remaining } => {
            log::info!("Frame {}: life lost, {} remaining", state.frame, remaining)
        }
        GameEvent::GameOver => log::info!("Frame {}: game over", state.frame),
        GameEvent::Won => log::info!(
            "Frame {}: all bricks destroyed, score {}",
            state.frame,
            state.score
        ),
    }
}
