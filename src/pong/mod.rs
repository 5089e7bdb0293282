//! Pong simulation
//!
//! Two paddles and a ball in a rectangular arena. Pure and single-threaded:
//! - The host calls [`tick`] on a fixed cadence
//! - Seeded RNG only, so a seed plus the input sequence replays exactly
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{MAX_BOUNCE_Y, Zone, bounce_direction, collides_x, collides_y, paddle_contact};
pub use input::{KeyBindings, key_down, key_up};
pub use state::{Direction, Entity, PongEvent, PongState, Side};
pub use tick::tick;
