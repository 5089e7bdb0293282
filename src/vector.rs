//! 2D vector value type used by the Pong simulation
//!
//! Arithmetic is exposed as named methods rather than operators so that
//! component-wise and scalar multiplication read differently at call sites.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D float vector (position, velocity, direction, acceleration, extents)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2(Vec2);

impl Vector2 {
    pub const ZERO: Self = Self(Vec2::ZERO);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.0.y
    }

    /// Copy with the horizontal component replaced
    #[inline]
    pub fn with_x(self, x: f32) -> Self {
        Self(self.0.with_x(x))
    }

    /// Copy with the vertical component replaced
    #[inline]
    pub fn with_y(self, y: f32) -> Self {
        Self(self.0.with_y(y))
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }

    /// Component-wise product
    #[inline]
    pub fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Both components multiplied by `factor`
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self(self.0 * factor)
    }

    /// Component-wise quotient
    #[inline]
    pub fn div(self, other: Self) -> Self {
        Self(self.0 / other.0)
    }

    #[inline]
    pub fn div_scalar(self, divisor: f32) -> Self {
        Self(self.0 / divisor)
    }

    /// Euclidean length, `sqrt(x² + y²)`
    #[inline]
    pub fn length(self) -> f32 {
        self.0.length()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector yields NaN components; callers must not normalize one.
    #[inline]
    pub fn normalize(self) -> Self {
        self.div_scalar(self.length())
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        v.0
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
