//! Back-and-forth horizontal patrol for platforms and enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Two-state horizontal oscillator bounded by `[0, right_bound]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patrol {
    /// Pixels moved per frame
    pub speed: f32,
    pub moving_right: bool,
    /// Right edge of the corridor (world width)
    pub right_bound: f32,
}

impl Patrol {
    pub fn new(speed: f32, right_bound: f32) -> Self {
        Self {
            speed,
            moving_right: true,
            right_bound,
        }
    }

    /// Move one frame and turn around at the corridor edges
    ///
    /// Speed is per frame, not per second; the turnaround is checked after
    /// the move so an edge may be overshot by up to one step.
    pub fn step(&mut self, position: &mut Vec2, scale: Vec2) {
        let half_width = scale.x / 2.0;
        if self.moving_right {
            position.x += self.speed;
            if position.x + half_width >= self.right_bound {
                self.moving_right = false;
                log::debug!("patrol turned left at x={:.1}", position.x);
            }
        } else {
            position.x -= self.speed;
            if position.x - half_width <= 0.0 {
                self.moving_right = true;
                log::debug!("patrol turned right at x={:.1}", position.x);
            }
        }
    }
}
