//! Keyboard to paddle-direction mapping
//!
//! Each paddle has an "up" key and a "down" key. Pressing either sets the
//! paddle's direction; releasing one only stops the paddle if that key's
//! direction is still the active one, so rolling from one key to the other
//! does not stall the paddle.

use serde::{Deserialize, Serialize};

use super::state::{Direction, PongState, Side};

/// Key assignments for both paddles (case-insensitive characters)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub player1_up: char,
    pub player1_down: char,
    pub player2_up: char,
    pub player2_down: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player1_up: 'a',
            player1_down: 'z',
            player2_up: 'k',
            player2_down: 'm',
        }
    }
}

impl KeyBindings {
    /// Which paddle and direction a key controls, if any
    pub fn resolve(&self, key: char) -> Option<(Side, Direction)> {
        let key = key.to_ascii_lowercase();
        let table = [
            (self.player1_up, Side::Left, Direction::Up),
            (self.player1_down, Side::Left, Direction::Down),
            (self.player2_up, Side::Right, Direction::Up),
            (self.player2_down, Side::Right, Direction::Down),
        ];

        table
            .into_iter()
            .find(|(bound, _, _)| bound.to_ascii_lowercase() == key)
            .map(|(_, side, dir)| (side, dir))
    }
}

/// Handle a key press. Returns false if the key is not bound.
pub fn key_down(state: &mut PongState, bindings: &KeyBindings, key: char) -> bool {
    match bindings.resolve(key) {
        Some((side, direction)) => {
            state.set_direction(side, direction);
            true
        }
        None => false,
    }
}

/// Handle a key release. Returns false if the key is not bound.
pub fn key_up(state: &mut PongState, bindings: &KeyBindings, key: char) -> bool {
    match bindings.resolve(key) {
        Some((side, direction)) => {
            if state.player(side).direction == direction.as_vector() {
                state.set_direction(side, Direction::Still);
            }
            true
        }
        None => false,
    }
}
