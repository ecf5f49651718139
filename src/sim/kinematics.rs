//! Kinematic state and per-frame integration steps
//!
//! Integration is explicit Euler with a caller-supplied frame delta. The
//! entity update calls these steps in a fixed order (velocity, jump impulse,
//! then Y position before X position).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::THRUST_EPSILON;

/// Position, velocity, acceleration and movement intent of one entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Kinematics {
    /// Center of the entity (world pixels, +y down)
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Movement intent; not read by the integrator
    pub movement: Vec2,
}

impl Kinematics {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Whether horizontal acceleration is effectively zero
    #[inline]
    pub fn is_coasting(&self) -> bool {
        self.acceleration.x.abs() < THRUST_EPSILON
    }

    /// Integrate velocity from acceleration on both axes
    ///
    /// While coasting, horizontal speed decays by `1 / (1 + damping * dt)`.
    pub fn integrate_velocity(&mut self, dt: f32, damping: f32) {
        self.velocity.x += self.acceleration.x * dt;
        if self.is_coasting() {
            self.velocity.x /= 1.0 + damping * dt;
        }
        self.velocity.y += self.acceleration.y * dt;
    }

    /// Instant upward velocity change
    #[inline]
    pub fn apply_jump(&mut self, power: f32) {
        self.velocity.y -= power;
    }

    #[inline]
    pub fn integrate_y(&mut self, dt: f32) {
        self.position.y += self.velocity.y * dt;
    }

    #[inline]
    pub fn integrate_x(&mut self, dt: f32) {
        self.position.x += self.velocity.x * dt;
    }

    /// Scale movement intent to unit length (zero stays zero)
    pub fn normalise_movement(&mut self) {
        self.movement = self.movement.normalize_or_zero();
    }
}
