//! Perch - arcade bird-flight physics core
//!
//! Core modules:
//! - `sim`: Frame-stepped entity simulation (kinematics, collisions, patrol, animation)
//! - `render`: Renderer-facing sprite data and texture ownership
//! - `tuning`: Data-driven physics and scene balance
//! - `error`: Construction and configuration errors

pub mod error;
pub mod render;
pub mod sim;
pub mod tuning;

pub use error::PerchError;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// World dimensions (pixels)
    pub const WORLD_WIDTH: f32 = 1000.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Animation frames per second for atlas entities
    pub const DEFAULT_FRAME_SPEED: f32 = 14.0;

    /// Downward acceleration applied to atlas entities (pixels/s²)
    pub const GRAVITY: f32 = 39.8;
    /// Horizontal acceleration while thrusting (pixels/s²)
    pub const HORIZONTAL_ACCELERATION: f32 = 500.0;
    /// Exponential drag coefficient applied when not thrusting
    pub const HORIZONTAL_DAMPING: f32 = 3.0;
    /// Acceleration magnitude below which the entity counts as coasting
    pub const THRUST_EPSILON: f32 = 0.0001;

    /// Restitution used unless overridden
    pub const DEFAULT_BOUNCINESS: f32 = 0.6;
    /// Rebound speeds below this snap to zero
    pub const MIN_BOUNCE_VELOCITY: f32 = 50.0;
    /// Vertical overlap required before a horizontal contact is resolved
    pub const Y_COLLISION_THRESHOLD: f32 = 0.5;

    /// Upward velocity change applied by a jump
    pub const JUMP_POWER: f32 = 100.0;
    /// Starting fuel
    pub const FUEL_CAPACITY: u32 = 1000;
    /// Fuel spent per jump attempt and per thrust interval
    pub const FUEL_STEP: u32 = 50;
    /// Seconds of continuous thrust per fuel step
    pub const THRUST_FUEL_INTERVAL: f32 = 0.2;

    /// Patrol speed (pixels per frame)
    pub const PATROL_SPEED: f32 = 2.0;

    /// Box growth applied to goal and hazard targets
    pub const TARGET_EXPANSION: f32 = 1.1;
}

