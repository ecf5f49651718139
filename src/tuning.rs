//! Data-driven physics and scene balance
//!
//! Loaded from JSON; every field falls back to the compiled-in default so a
//! tuning file only needs the values it changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::PerchError;

/// Per-entity physics parameters, copied into each entity at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Vertical acceleration given to atlas entities
    pub gravity: f32,
    /// Horizontal acceleration while a pilot thrusts
    pub thrust: f32,
    /// Drag coefficient applied while coasting
    pub horizontal_damping: f32,
    pub bounciness: f32,
    pub min_bounce_velocity: f32,
    pub y_collision_threshold: f32,
    pub jump_power: f32,
    pub fuel_capacity: u32,
    pub fuel_step: u32,
    pub thrust_fuel_interval: f32,
    pub patrol_speed: f32,
    /// Right edge of the patrol corridor
    pub world_width: f32,
    pub frame_speed: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            thrust: HORIZONTAL_ACCELERATION,
            horizontal_damping: HORIZONTAL_DAMPING,
            bounciness: DEFAULT_BOUNCINESS,
            min_bounce_velocity: MIN_BOUNCE_VELOCITY,
            y_collision_threshold: Y_COLLISION_THRESHOLD,
            jump_power: JUMP_POWER,
            fuel_capacity: FUEL_CAPACITY,
            fuel_step: FUEL_STEP,
            thrust_fuel_interval: THRUST_FUEL_INTERVAL,
            patrol_speed: PATROL_SPEED,
            world_width: WORLD_WIDTH,
            frame_speed: DEFAULT_FRAME_SPEED,
        }
    }
}

/// Complete tuning set for a flight session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: Physics,

    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    /// Growth factor applied to goal/hazard boxes
    pub target_expansion: f32,

    // === Bird ===
    pub bird_size: Vec2,
    pub bird_bounciness: f32,
    pub bird_frame_speed: f32,
    /// Sprite sheet layout (columns, rows)
    pub bird_sheet: (u32, u32),
    pub bird_frames: Vec<u32>,

    // === Nest and hawks ===
    pub nest_size: Vec2,
    pub nest_speed: f32,
    pub hawk_size: Vec2,
    pub hawk_speeds: [f32; 2],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            physics: Physics::default(),

            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            target_expansion: TARGET_EXPANSION,

            bird_size: Vec2::new(40.0, 40.0),
            bird_bounciness: 0.001,
            bird_frame_speed: 6.0,
            bird_sheet: (6, 9),
            bird_frames: vec![0, 1, 2, 3, 4, 5],

            nest_size: Vec2::new(60.0, 30.0),
            nest_speed: 2.0,
            hawk_size: Vec2::new(80.0, 50.0),
            hawk_speeds: [2.0, 5.0],
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, PerchError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PerchError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, PerchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), PerchError> {
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(PerchError::Config(format!(
                "world must have positive size, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        for speed in [self.physics.frame_speed, self.bird_frame_speed] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(PerchError::InvalidFrameSpeed(speed));
            }
        }
        for size in [self.bird_size, self.nest_size, self.hawk_size] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(PerchError::InvalidCollider {
                    width: size.x,
                    height: size.y,
                });
            }
        }
        let interval = self.physics.thrust_fuel_interval;
        if !(interval.is_finite() && interval > 0.0) {
            return Err(PerchError::Config(format!(
                "thrust_fuel_interval must be positive, got {}",
                interval
            )));
        }
        for bounciness in [self.physics.bounciness, self.bird_bounciness] {
            if !(0.0..=1.0).contains(&bounciness) {
                return Err(PerchError::Config(format!(
                    "bounciness must be within [0, 1], got {}",
                    bounciness
                )));
            }
        }
        if self.target_expansion < 1.0 {
            log::warn!(
                "target_expansion {} shrinks goal boxes",
                self.target_expansion
            );
        }
        Ok(())
    }

    /// Physics for entities in this world
    pub fn physics(&self) -> Physics {
        Physics {
            world_width: self.world_width,
            ..self.physics
        }
    }
}
