//! Construction and configuration errors
//!
//! Per-frame simulation never fails; bad input is rejected when an entity or
//! tuning set is built.

use std::fmt;

use crate::sim::Direction;

/// Errors raised while building entities or loading tuning
#[derive(Debug, Clone, PartialEq)]
pub enum PerchError {
    /// Animation atlas has no (or an empty) frame sequence for a direction
    MissingAnimation(Direction),
    /// Frame speed must be finite and positive
    InvalidFrameSpeed(f32),
    /// Sprite sheet needs at least one column and one row
    InvalidSheetLayout { cols: u32, rows: u32 },
    /// Collider dimensions must be strictly positive
    InvalidCollider { width: f32, height: f32 },
    /// Animation frame index lies outside the sprite sheet
    FrameOutOfSheet { frame: u32, cells: u32 },
    /// Texture provider failed to load an asset
    Texture(String),
    /// Tuning file could not be read or parsed
    Config(String),
}

impl fmt::Display for PerchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerchError::MissingAnimation(dir) => {
                write!(f, "animation atlas has no frames for direction {:?}", dir)
            }
            PerchError::InvalidFrameSpeed(speed) => {
                write!(f, "frame speed must be positive, got {}", speed)
            }
            PerchError::InvalidSheetLayout { cols, rows } => {
                write!(f, "invalid sprite sheet layout {}x{}", cols, rows)
            }
            PerchError::InvalidCollider { width, height } => {
                write!(f, "collider dimensions must be positive, got {}x{}", width, height)
            }
            PerchError::FrameOutOfSheet { frame, cells } => {
                write!(f, "frame {} is outside a sheet of {} cells", frame, cells)
            }
            PerchError::Texture(msg) => write!(f, "texture error: {}", msg),
            PerchError::Config(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for PerchError {}

impl From<serde_json::Error> for PerchError {
    fn from(e: serde_json::Error) -> Self {
        PerchError::Config(e.to_string())
    }
}

impl From<std::io::Error> for PerchError {
    fn from(e: std::io::Error) -> Self {
        PerchError::Config(e.to_string())
    }
}
