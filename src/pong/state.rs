//! Pong game state and core simulation types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::{PongConfig, ServeConfig};
use crate::vector::Vector2;

/// Which player a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, defending the left wall
    Left,
    /// Player 2, defending the right wall
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical intent of a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Down,
    #[default]
    Still,
    Up,
}

impl Direction {
    /// -1, 0 or +1
    pub fn sign(self) -> f32 {
        match self {
            Direction::Down => -1.0,
            Direction::Still => 0.0,
            Direction::Up => 1.0,
        }
    }

    /// Direction vector for a paddle, `(0, sign)`
    pub fn as_vector(self) -> Vector2 {
        Vector2::new(0.0, self.sign())
    }
}

/// Something that happened during a tick, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongEvent {
    /// A point was scored by the given side; the ball was reset for the serve
    Scored(Side),
    /// The ball bounced off the given side's paddle
    PaddleHit(Side),
    /// The ball bounced off the top or bottom wall
    WallBounce,
}

/// A simulated object: one of the paddles or the ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub position: Vector2,
    pub velocity: Vector2,
    pub direction: Vector2,
    pub acceleration: Vector2,
    /// Half the width/height of the collision footprint
    pub half_extent: Vector2,
}

impl Entity {
    /// Stationary entity with no heading or acceleration
    pub fn new(position: Vector2, velocity: Vector2, half_extent: Vector2) -> Self {
        Self {
            position,
            velocity,
            direction: Vector2::ZERO,
            acceleration: Vector2::ZERO,
            half_extent,
        }
    }

    /// Move by `velocity * dt * direction`
    pub fn advance(&mut self, dt: f32) {
        let step = self.velocity.scale(dt).mul(self.direction);
        self.position = self.position.add(step);
    }
}

/// Complete Pong session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongState {
    /// Left paddle
    pub player1: Entity,
    /// Right paddle
    pub player2: Entity,
    pub ball: Entity,
    /// Arena width (x bound)
    pub width: f32,
    /// Arena height (y bound)
    pub height: f32,
    /// Values the ball is reset to after a point
    pub serve: ServeConfig,
    /// Simulation tick counter
    pub time_ticks: u64,
    score1: u32,
    score2: u32,
    rng: Pcg32,
}

impl PongState {
    /// Create a new session; `seed` drives the serve and bounce randomness
    pub fn new(config: &PongConfig, seed: u64) -> Self {
        let mid_y = config.height / 2.0;

        let player1 = Entity::new(
            Vector2::new(config.paddle_inset, mid_y),
            config.paddle_velocity,
            config.paddle_half_extent,
        );
        let player2 = Entity::new(
            Vector2::new(config.width - config.paddle_inset, mid_y),
            config.paddle_velocity,
            config.paddle_half_extent,
        );
        let ball = Entity {
            position: Vector2::new(config.width / 2.0, mid_y),
            velocity: config.ball_velocity,
            direction: config.ball_direction,
            acceleration: config.ball_acceleration,
            half_extent: config.ball_half_extent,
        };

        Self {
            player1,
            player2,
            ball,
            width: config.width,
            height: config.height,
            serve: config.serve.clone(),
            time_ticks: 0,
            score1: 0,
            score2: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn player(&self, side: Side) -> &Entity {
        match side {
            Side::Left => &self.player1,
            Side::Right => &self.player2,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Entity {
        match side {
            Side::Left => &mut self.player1,
            Side::Right => &mut self.player2,
        }
    }

    pub fn ball(&self) -> &Entity {
        &self.ball
    }

    /// Set a paddle's vertical intent
    pub fn set_direction(&mut self, side: Side, direction: Direction) {
        self.player_mut(side).direction = direction.as_vector();
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score1,
            Side::Right => self.score2,
        }
    }

    /// `(player 1, player 2)`
    pub fn scores(&self) -> (u32, u32) {
        (self.score1, self.score2)
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Credit a point to `scorer` and put the ball back into play
    pub(crate) fn award_point(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.score1 += 1,
            Side::Right => self.score2 += 1,
        }
        self.reset_ball(scorer);
    }

    /// Serve from near the scorer's wall, heading toward the opponent
    fn reset_ball(&mut self, scorer: Side) {
        let (x, heading) = match scorer {
            Side::Left => (self.serve.inset, 1.0),
            Side::Right => (self.width - self.serve.inset, -1.0),
        };
        let dir = self.serve.direction;
        let dir_y = if self.rng.random_bool(0.5) {
            dir.y().abs()
        } else {
            -dir.y().abs()
        };

        self.ball.position = Vector2::new(x, self.height / 2.0);
        self.ball.velocity = self.serve.velocity;
        self.ball.direction = Vector2::new(dir.x().abs() * heading, dir_y);
    }
}
