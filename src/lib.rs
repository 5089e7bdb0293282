//! Duel Arcade - two-player Pong and Tic-Tac-Toe cores
//!
//! Core modules:
//! - `vector`: 2D vector value type
//! - `pong`: Deterministic Pong simulation (movement, collisions, scoring)
//! - `tictactoe`: Tic-tac-toe rules engine and round flow
//! - `settings`: Data-driven tuning loaded from JSON
//!
//! Rendering and input wiring belong to the host; it drives the cores through
//! plain function calls and reads their state back.

pub mod pong;
pub mod settings;
pub mod tictactoe;
pub mod vector;

pub use settings::{PongConfig, ServeConfig, Settings};
pub use vector::Vector2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz)
    pub const SIM_DT: f32 = 0.02;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
