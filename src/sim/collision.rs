//! Collision detection and response
//!
//! Every check in a frame runs against the ball's position *before* it is
//! advanced. Bricks and the paddle use the two-phase test from
//! [`super::geometry`]; the arena walls, ceiling and floor look at the
//! projected next position instead, so a wall bounce fires one frame early.

use super::geometry::{Edges, Rect, bounce_axis, overlaps};
use super::state::{Arena, Ball, BrickGrid, GameEvent, Paddle};

/// Result of resolving brick contacts for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickOutcome {
    /// Bricks remain (possibly some were destroyed)
    Remaining,
    /// The last brick was destroyed
    Cleared,
}

/// Result of the ceiling/floor check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    None,
    /// Bounced off the top of the arena
    Ceiling,
    /// Leaving through the bottom of the arena
    Floor,
}

/// Resolve ball contacts against every live brick, column by column.
///
/// Each overlapping brick is destroyed and applies its own single-axis
/// bounce, so two bricks hit in the same frame can cancel each other's flip.
/// Returns [`BrickOutcome::Cleared`] as soon as the score reaches the brick
/// count; later bricks are not visited.
pub fn ball_brick_collisions(
    ball: &mut Ball,
    edges: &Edges,
    bricks: &mut BrickGrid,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) -> BrickOutcome {
    let win_score = bricks.columns * bricks.rows;
    let (width, height) = (bricks.brick_width, bricks.brick_height);

    for brick in bricks.bricks.iter_mut().filter(|b| b.is_alive()) {
        let rect = Rect::new(brick.pos.x, brick.pos.y, width, height);
        if !overlaps(edges, &rect) {
            continue;
        }

        if let Some(axis) = bounce_axis(edges, &rect) {
            ball.vel = axis.reflect(ball.vel);
        }

        brick.destroy();
        *score += 1;
        events.push(GameEvent::BrickDestroyed {
            column: brick.column,
            row: brick.row,
        });

        if *score == win_score {
            return BrickOutcome::Cleared;
        }
    }

    BrickOutcome::Remaining
}

/// Bounce the ball off the paddle. Returns true on contact.
pub fn ball_paddle_collision(
    ball: &mut Ball,
    edges: &Edges,
    paddle: &Paddle,
    events: &mut Vec<GameEvent>,
) -> bool {
    let rect = paddle.rect();
    if !overlaps(edges, &rect) {
        return false;
    }

    if let Some(axis) = bounce_axis(edges, &rect) {
        ball.vel = axis.reflect(ball.vel);
    }
    events.push(GameEvent::PaddleHit);
    true
}

/// Invert dx if the projected position crosses a side wall (inset by the
/// radius). Returns true on bounce.
pub fn ball_wall_collision(ball: &mut Ball, arena: &Arena, events: &mut Vec<GameEvent>) -> bool {
    let next_x = ball.projected().x;
    if next_x > arena.width - ball.radius || next_x < ball.radius {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
        return true;
    }
    false
}

/// Invert dy at the ceiling; report a floor crossing without bouncing
pub fn ball_vertical_collision(
    ball: &mut Ball,
    arena: &Arena,
    events: &mut Vec<GameEvent>,
) -> VerticalContact {
    let next_y = ball.projected().y;
    if next_y < ball.radius {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::CeilingBounce);
        VerticalContact::Ceiling
    } else if next_y > arena.height - ball.radius {
        VerticalContact::Floor
    } else {
        VerticalContact::None
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::state::BrickStatus;

    fn setup() -> (GameConfig, Ball, BrickGrid) {
        let config = GameConfig::default();
        let ball = Ball::new(&config);
        let bricks = BrickGrid::new(&config);
        (config, ball, bricks)
    }

    #[test]
    fn test_brick_hit_from_below() {
        let (_, mut ball, mut bricks) = setup();
        let target = bricks.get(0, 4).expect("brick").clone();
        let rect = bricks.rect(&target);

        // Ball centred under the brick, top edge touching its bottom face
        ball.pos = Vec2::new(rect.x + rect.width / 2.0, rect.bottom() + ball.radius);
        ball.vel = Vec2::new(2.0, -2.0);

        let mut score = 0;
        let mut events = Vec::new();
        let edges = ball.edges();
        let outcome = ball_brick_collisions(&mut ball, &edges, &mut bricks, &mut score, &mut events);

        assert_eq!(outcome, BrickOutcome::Remaining);
        assert_eq!(score, 1);
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(
            bricks.get(0, 4).expect("brick").status,
            BrickStatus::Destroyed
        );
        assert_eq!(events, vec![GameEvent::BrickDestroyed { column: 0, row: 4 }]);
    }

    #[test]
    fn test_brick_side_hit_flips_dx() {
        // Whole-number layout so the flush contact is exact
        let config = GameConfig {
            brick_offset_left: 5.0,
            ..GameConfig::default()
        };
        let mut ball = Ball::new(&config);
        let mut bricks = BrickGrid::new(&config);
        let target = bricks.get(3, 2).expect("brick").clone();
        let rect = bricks.rect(&target);
        // The ball reaches into the padding gap, clear the neighbour
        bricks.get_mut(2, 2).expect("brick").destroy();

        // Flush with the brick's left face, vertically centred
        ball.pos = Vec2::new(rect.x - ball.radius, rect.y + rect.height / 2.0);
        ball.vel = Vec2::new(2.0, -2.0);

        let mut score = 0;
        let mut events = Vec::new();
        let edges = ball.edges();
        ball_brick_collisions(&mut ball, &edges, &mut bricks, &mut score, &mut events);

        assert_eq!(score, 1);
        assert_eq!(ball.vel, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn test_destroyed_brick_ignored() {
        let (_, mut ball, mut bricks) = setup();
        let target = bricks.get(0, 4).expect("brick").clone();
        let rect = bricks.rect(&target);
        bricks.get_mut(0, 4).expect("brick").destroy();

        ball.pos = Vec2::new(rect.x + rect.width / 2.0, rect.bottom() + ball.radius);
        let vel = ball.vel;

        let mut score = 0;
        let mut events = Vec::new();
        let edges = ball.edges();
        ball_brick_collisions(&mut ball, &edges, &mut bricks, &mut score, &mut events);

        assert_eq!(score, 0);
        assert_eq!(ball.vel, vel);
        assert!(events.is_empty());
    }

    #[test]
    fn test_two_bricks_same_frame() {
        let (_, mut ball, mut bricks) = setup();
        let left = bricks.rect(&bricks.get(0, 4).expect("brick").clone());
        let right = bricks.rect(&bricks.get(1, 4).expect("brick").clone());

        // Straddle the gap between two neighbouring bricks from below
        let gap_center = (left.right() + right.x) / 2.0;
        ball.pos = Vec2::new(gap_center, left.bottom() + ball.radius - 1.0);
        ball.vel = Vec2::new(2.0, -2.0);

        let mut score = 0;
        let mut events = Vec::new();
        let edges = ball.edges();
        ball_brick_collisions(&mut ball, &edges, &mut bricks, &mut score, &mut events);

        // Both destroyed, both flipped dy: net velocity unchanged
        assert_eq!(score, 2);
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_last_brick_clears() {
        let (_, mut ball, mut bricks) = setup();
        for brick in bricks.bricks.iter_mut().skip(1) {
            brick.destroy();
        }
        let mut score = 49;
        let rect = bricks.rect(&bricks.get(0, 0).expect("brick").clone());
        ball.pos = Vec2::new(rect.x + rect.width / 2.0, rect.bottom() + ball.radius);

        let mut events = Vec::new();
        let edges = ball.edges();
        let outcome = ball_brick_collisions(&mut ball, &edges, &mut bricks, &mut score, &mut events);

        assert_eq!(outcome, BrickOutcome::Cleared);
        assert_eq!(score, 50);
        assert_eq!(bricks.alive_count(), 0);
    }

    #[test]
    fn test_paddle_hit_flips_dy_only() {
        let config = GameConfig::default();
        let mut ball = Ball::new(&config);
        let paddle = Paddle::new(&config);

        // Descending onto the paddle's top face, horizontally inside it
        ball.pos = Vec2::new(paddle.x + paddle.width / 2.0, paddle.y - ball.radius + 1.0);
        ball.vel = Vec2::new(2.0, 2.0);

        let mut events = Vec::new();
        let edges = ball.edges();
        assert!(ball_paddle_collision(&mut ball, &edges, &paddle, &mut events));
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(events, vec![GameEvent::PaddleHit]);
    }

    #[test]
    fn test_paddle_miss() {
        let config = GameConfig::default();
        let mut ball = Ball::new(&config);
        let paddle = Paddle::new(&config);

        ball.pos = Vec2::new(20.0, paddle.y - ball.radius);
        let vel = ball.vel;

        let mut events = Vec::new();
        let edges = ball.edges();
        assert!(!ball_paddle_collision(&mut ball, &edges, &paddle, &mut events));
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_wall_uses_projected_position() {
        let config = GameConfig::default();
        let arena = Arena {
            width: config.arena_width,
            height: config.arena_height,
        };
        let mut ball = Ball::new(&config);
        let mut events = Vec::new();

        // Currently inside, next step would cross the right boundary
        ball.pos = Vec2::new(469.0, 500.0);
        ball.vel = Vec2::new(2.0, -2.0);
        assert!(ball_wall_collision(&mut ball, &arena, &mut events));
        assert_eq!(ball.vel.x, -2.0);

        // Left boundary
        ball.pos = Vec2::new(11.0, 500.0);
        ball.vel = Vec2::new(-2.0, -2.0);
        assert!(ball_wall_collision(&mut ball, &arena, &mut events));
        assert_eq!(ball.vel.x, 2.0);

        // Landing exactly on the boundary is not a crossing
        ball.pos = Vec2::new(468.0, 500.0);
        ball.vel = Vec2::new(2.0, -2.0);
        assert!(!ball_wall_collision(&mut ball, &arena, &mut events));
    }

    #[test]
    fn test_ceiling_and_floor() {
        let config = GameConfig::default();
        let arena = Arena {
            width: config.arena_width,
            height: config.arena_height,
        };
        let mut ball = Ball::new(&config);
        let mut events = Vec::new();

        ball.pos = Vec2::new(200.0, 11.0);
        ball.vel = Vec2::new(2.0, -2.0);
        assert_eq!(
            ball_vertical_collision(&mut ball, &arena, &mut events),
            VerticalContact::Ceiling
        );
        assert_eq!(ball.vel.y, 2.0);

        ball.pos = Vec2::new(200.0, 949.0);
        ball.vel = Vec2::new(2.0, 2.0);
        assert_eq!(
            ball_vertical_collision(&mut ball, &arena, &mut events),
            VerticalContact::Floor
        );
        // Floor crossing does not bounce
        assert_eq!(ball.vel.y, 2.0);

        ball.pos = Vec2::new(200.0, 500.0);
        assert_eq!(
            ball_vertical_collision(&mut ball, &arena, &mut events),
            VerticalContact::None
        );
        assert_eq!(events, vec![GameEvent::CeilingBounce]);
    }
}
