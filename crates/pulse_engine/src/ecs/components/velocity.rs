//! Velocity components for moving entities
//!
//! Both components carry a drag coefficient and an optional speed cap. Drag
//! is a linear per-tick decay (`v *= max(0, 1 - drag * dt)`), applied by the
//! motion integrator with the fixed tick interval so decay is deterministic.

use crate::foundation::math::Vec2;

/// Linear velocity in world units per second
#[derive(Debug, Clone, Copy)]
pub struct LinearVelocity {
    /// Current velocity
    pub value: Vec2,

    /// Linear decay coefficient; 0 disables drag
    pub drag: f32,

    /// Speed cap in units per second; values <= 0 disable the cap
    pub max_speed: f32,
}

impl Default for LinearVelocity {
    fn default() -> Self {
        Self {
            value: Vec2::zeros(),
            drag: 0.0,
            max_speed: -1.0,
        }
    }
}

impl LinearVelocity {
    /// Create a velocity with the given initial value and no drag or cap
    pub fn new(value: Vec2) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    /// Add an impulse to the current velocity
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.value += impulse;
    }
}

/// Angular velocity in degrees per second
#[derive(Debug, Clone, Copy)]
pub struct AngularVelocity {
    /// Current angular velocity; positive is counter-clockwise
    pub value: f32,

    /// Linear decay coefficient; 0 disables drag
    pub drag: f32,

    /// Angular speed cap in degrees per second; values <= 0 disable the cap
    pub max_speed: f32,
}

impl Default for AngularVelocity {
    fn default() -> Self {
        Self {
            value: 0.0,
            drag: 0.0,
            max_speed: -1.0,
        }
    }
}

impl AngularVelocity {
    /// Create an angular velocity with the given initial value
    pub fn new(value: f32) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    /// Add an angular impulse to the current velocity
    pub fn add_impulse(&mut self, impulse: f32) {
        self.value += impulse;
    }
}
