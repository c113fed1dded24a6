//! Input-to-intent mapping
//!
//! Handlers only touch the paddle and the held-key flags. Events are applied
//! as they arrive; the next [`super::tick`] reads whatever is current.

use serde::{Deserialize, Serialize};

use super::state::{GameState, InputIntent, Paddle};

/// Direction keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a keyboard key name; unrecognized keys map to `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Right" | "ArrowRight" => Some(Key::Right),
            "Left" | "ArrowLeft" => Some(Key::Left),
            _ => None,
        }
    }
}

/// Raw events delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer moved; `x` is relative to the arena's left edge
    PointerMove { x: f32 },
}

impl InputEvent {
    /// Build a key-down event from a key name
    pub fn key_down(code: &str) -> Option<Self> {
        Key::from_code(code).map(InputEvent::KeyDown)
    }

    /// Build a key-up event from a key name
    pub fn key_up(code: &str) -> Option<Self> {
        Key::from_code(code).map(InputEvent::KeyUp)
    }
}

/// Apply an input event to a session. Ignored once the session has ended.
pub fn handle_input(state: &mut GameState, event: &InputEvent) {
    if state.phase.is_terminal() {
        return;
    }

    match *event {
        InputEvent::KeyDown(key) => set_key(&mut state.intent, key, true),
        InputEvent::KeyUp(key) => set_key(&mut state.intent, key, false),
        InputEvent::PointerMove { x } => {
            state.paddle.center_on(x);
        }
    }
}

fn set_key(intent: &mut InputIntent, key: Key, pressed: bool) {
    match key {
        Key::Right => intent.moving_right = pressed,
        Key::Left => intent.moving_left = pressed,
    }
}

/// Move the paddle by the held keys (once per frame). Right wins when both
/// are held.
pub fn apply_intent(paddle: &mut Paddle, intent: &InputIntent) {
    if intent.moving_right {
        paddle.move_right();
    } else if intent.moving_left {
        paddle.move_left();
    }
}
