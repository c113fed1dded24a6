//! Per-frame simulation step
//!
//! Order within a frame: held-key intent moves the paddle, then bricks,
//! paddle, side walls and ceiling/floor are resolved against the ball's
//! current position, and only then is the ball advanced by its velocity.

use super::collision::{
    BrickOutcome, VerticalContact, ball_brick_collisions, ball_paddle_collision,
    ball_vertical_collision, ball_wall_collision,
};
use super::input::apply_intent;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the session by one frame. No-op once the session has ended.
///
/// Held keys move the paddle before any collision is resolved, so this
/// frame's paddle check runs against the moved paddle.
pub fn tick(state: &mut GameState) {
    if state.phase.is_terminal() {
        return;
    }

    state.frame += 1;

    apply_intent(&mut state.paddle, &state.intent);

    let edges = state.ball.edges();

    let outcome = ball_brick_collisions(
        &mut state.ball,
        &edges,
        &mut state.bricks,
        &mut state.score,
        &mut state.events,
    );
    if outcome == BrickOutcome::Cleared {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
        return;
    }

    ball_paddle_collision(&mut state.ball, &edges, &state.paddle, &mut state.events);
    ball_wall_collision(&mut state.ball, &state.arena, &mut state.events);

    if ball_vertical_collision(&mut state.ball, &state.arena, &mut state.events)
        == VerticalContact::Floor
    {
        // The ball rests at its spawn point (or stays put on game over) for
        // the rest of this frame
        lose_life(state);
        return;
    }

    state.ball.pos += state.ball.vel;
}

/// Ball left through the bottom: decrement lives, then either end the
/// session or respawn the ball. The paddle stays where it is.
fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        remaining: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
    } else {
        state.ball.reset();
    }
}
