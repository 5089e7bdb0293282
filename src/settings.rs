//! Game settings
//!
//! Everything tunable lives in one serde value passed to the cores at start
//! instead of being read from globals. Missing sections and fields fall back
//! to the defaults, so a settings file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pong::KeyBindings;
use crate::tictactoe::{GridGeometry, RoundConfig};
use crate::vector::Vector2;

/// Ball reset applied after every point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Distance from the scorer's wall to the serve position
    pub inset: f32,
    pub velocity: Vector2,
    /// Magnitudes only; the signs are chosen at serve time
    pub direction: Vector2,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            inset: 100.0,
            velocity: Vector2::new(400.0, 400.0),
            direction: Vector2::new(0.7682, 0.6401),
        }
    }
}

/// Arena and entity tuning for Pong
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    pub width: f32,
    pub height: f32,
    /// Distance from each side wall to its paddle's center
    pub paddle_inset: f32,
    pub paddle_velocity: Vector2,
    pub paddle_half_extent: Vector2,
    pub ball_velocity: Vector2,
    pub ball_direction: Vector2,
    /// Added to the ball velocity every tick
    pub ball_acceleration: Vector2,
    pub ball_half_extent: Vector2,
    pub serve: ServeConfig,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            paddle_inset: 50.0,
            paddle_velocity: Vector2::new(500.0, 500.0),
            paddle_half_extent: Vector2::new(5.0, 40.0),
            ball_velocity: Vector2::new(500.0, 500.0),
            ball_direction: Vector2::new(0.7682, 0.6401),
            ball_acceleration: Vector2::new(0.1, 0.1),
            ball_half_extent: Vector2::new(8.0, 8.0),
            serve: ServeConfig::default(),
        }
    }
}

/// All game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for serve and bounce randomness
    pub seed: u64,
    pub pong: PongConfig,
    pub keys: KeyBindings,
    pub grid: GridGeometry,
    pub round: RoundConfig,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults when the file
    /// is missing or malformed
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
