//! Game state and core simulation types
//!
//! A [`GameState`] owns every entity of one session. Nothing is shared
//! between sessions; a new game is a new `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Edges, Rect};
use crate::settings::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives ran out
    GameOver,
    /// Every brick destroyed
    Won,
}

impl GamePhase {
    /// GameOver and Won have no outgoing transitions
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    /// User-facing end-of-session notice
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            GamePhase::Playing => None,
            GamePhase::GameOver => Some("GAME OVER"),
            GamePhase::Won => Some("You win, congratulations!"),
        }
    }
}

/// Things that happened during a frame, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { column: u32, row: u32 },
    PaddleHit,
    WallBounce,
    CeilingBounce,
    LifeLost { remaining: u8 },
    GameOver,
    Won,
}

/// Fixed arena bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub radius: f32,
    /// Where the ball spawns and respawns
    pub base_pos: Vec2,
    pub base_vel: Vec2,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        let base_pos = Vec2::new(
            config.arena_width / 2.0,
            config.arena_height - config.ball_spawn_bottom_offset,
        );
        let base_vel = Vec2::new(config.ball_base_dx, config.ball_base_dy);
        Self {
            pos: base_pos,
            vel: base_vel,
            radius: config.ball_radius,
            base_pos,
            base_vel,
        }
    }

    /// Bounding edges derived from the current position
    #[inline]
    pub fn edges(&self) -> Edges {
        Edges::around(self.pos, self.radius)
    }

    /// Position after this frame's velocity is applied
    #[inline]
    pub fn projected(&self) -> Vec2 {
        self.pos + self.vel
    }

    /// Return to the spawn position and velocity (after a life is lost)
    pub fn reset(&mut self) {
        self.pos = self.base_pos;
        self.vel = self.base_vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, always within `[0, max_x]`
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Units per frame while a direction key is held
    pub speed: f32,
    /// Largest allowed x
    pub max_x: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        let max_x = config.paddle_max_x();
        Self {
            x: max_x / 2.0,
            y: config.paddle_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            max_x,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn move_right(&mut self) {
        self.x = (self.x + self.speed).min(self.max_x);
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - self.speed).max(0.0);
    }

    /// Move so the paddle is centred on `center_x`.
    ///
    /// Dropped (returns false) if any part of the paddle would leave the
    /// arena; no clamping.
    pub fn center_on(&mut self, center_x: f32) -> bool {
        let x = center_x - self.width / 2.0;
        if !(0.0..=self.max_x).contains(&x) {
            return false;
        }
        self.x = x;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Alive,
    Destroyed,
}

/// One grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub column: u32,
    pub row: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }

    /// Destroy the brick. Returns false if it was already destroyed.
    pub fn destroy(&mut self) -> bool {
        if self.is_alive() {
            self.status = BrickStatus::Destroyed;
            true
        } else {
            false
        }
    }
}

/// Fixed `columns × rows` grid of bricks, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub columns: u32,
    pub rows: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out a fully alive grid
    pub fn new(config: &GameConfig) -> Self {
        let brick_width = config.brick_width();
        let brick_height = config.brick_height;
        let mut bricks = Vec::with_capacity(config.brick_count() as usize);

        for column in 0..config.brick_columns {
            for row in 0..config.brick_rows {
                let x = column as f32 * (brick_width + config.brick_padding)
                    + config.brick_offset_left;
                let y = row as f32 * (brick_height + config.brick_padding)
                    + config.brick_offset_top;
                bricks.push(Brick {
                    column,
                    row,
                    pos: Vec2::new(x, y),
                    status: BrickStatus::Alive,
                });
            }
        }

        Self {
            columns: config.brick_columns,
            rows: config.brick_rows,
            brick_width,
            brick_height,
            bricks,
        }
    }

    pub fn rect(&self, brick: &Brick) -> Rect {
        Rect::new(brick.pos.x, brick.pos.y, self.brick_width, self.brick_height)
    }

    pub fn get(&self, column: u32, row: u32) -> Option<&Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.bricks.get((column * self.rows + row) as usize)
    }

    pub fn get_mut(&mut self, column: u32, row: u32) -> Option<&mut Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.bricks.get_mut((column * self.rows + row) as usize)
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    pub fn destroyed_count(&self) -> usize {
        self.len() - self.alive_count()
    }
}

/// Paddle movement requested by held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub moving_right: bool,
    pub moving_left: bool,
}

/// Complete state of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed so far
    pub score: u32,
    pub lives: u8,
    pub phase: GamePhase,
    pub intent: InputIntent,
    /// Frames advanced
    pub frame: u64,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session
    pub fn new(config: &GameConfig) -> Self {
        Self {
            arena: Arena {
                width: config.arena_width,
                height: config.arena_height,
            },
            ball: Ball::new(config),
            paddle: Paddle::new(config),
            bricks: BrickGrid::new(config),
            score: 0,
            lives: config.starting_lives,
            phase: GamePhase::Playing,
            intent: InputIntent::default(),
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Score needed to win
    pub fn win_score(&self) -> u32 {
        self.bricks.columns * self.bricks.rows
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let config = GameConfig::default();
        let state = GameState::new(&config);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.ball.pos, Vec2::new(240.0, 925.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 202.5);
        assert_eq!(state.bricks.len(), 50);
        assert_eq!(state.bricks.alive_count(), 50);
        assert_eq!(state.win_score(), 50);
    }

    #[test]
    fn test_brick_layout() {
        let config = GameConfig::default();
        let grid = BrickGrid::new(&config);

        let first = grid.get(0, 0).expect("first brick");
        assert_eq!(first.pos, Vec2::new(4.0, 30.0));

        let brick = grid.get(2, 3).expect("brick");
        assert_eq!(brick.column, 2);
        assert_eq!(brick.row, 3);
        let expected_x = 2.0 * (grid.brick_width + 10.0) + 4.0;
        assert!((brick.pos.x - expected_x).abs() < 0.001);
        assert_eq!(brick.pos.y, 3.0 * 30.0 + 30.0);

        assert!(grid.get(10, 0).is_none());
        assert!(grid.get(0, 5).is_none());
    }

    #[test]
    fn test_brick_destroyed_once() {
        let config = GameConfig::default();
        let mut grid = BrickGrid::new(&config);

        let brick = grid.get_mut(1, 1).expect("brick");
        assert!(brick.destroy());
        assert!(!brick.destroy());
        assert_eq!(brick.status, BrickStatus::Destroyed);
        assert_eq!(grid.destroyed_count(), 1);
    }

    #[test]
    fn test_paddle_keyboard_clamps() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);

        paddle.x = 404.0;
        paddle.move_right();
        assert_eq!(paddle.x, 405.0);

        paddle.x = 1.0;
        paddle.move_left();
        assert_eq!(paddle.x, 0.0);
    }

    #[test]
    fn test_paddle_center_on() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);

        assert!(paddle.center_on(100.0));
        assert_eq!(paddle.x, 62.5);

        // Would hang off the left edge: dropped, no clamping
        assert!(!paddle.center_on(10.0));
        assert_eq!(paddle.x, 62.5);

        // Would hang off the right edge
        assert!(!paddle.center_on(470.0));
        assert_eq!(paddle.x, 62.5);

        // Exactly flush with the right edge is allowed
        assert!(paddle.center_on(442.5));
        assert_eq!(paddle.x, 405.0);

        // Non-finite pointers never reach the paddle
        assert!(!paddle.center_on(f32::NAN));
        assert!(!paddle.center_on(f32::INFINITY));
        assert_eq!(paddle.x, 405.0);
    }

    #[test]
    fn test_ball_reset() {
        let config = GameConfig::default();
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(12.0, 900.0);
        ball.vel = Vec2::new(-2.0, 2.0);

        ball.reset();
        assert_eq!(ball.pos, ball.base_pos);
        assert_eq!(ball.vel, ball.base_vel);
    }

    #[test]
    fn test_phase_notices() {
        assert_eq!(GamePhase::Playing.notice(), None);
        assert!(!GamePhase::Playing.is_terminal());
        assert_eq!(GamePhase::GameOver.notice(), Some("GAME OVER"));
        assert!(GamePhase::Won.is_terminal());
    }
}
