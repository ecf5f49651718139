//! Fuel: the consumable resource that gates jumping and thrust
//!
//! Fuel only ever goes down. Once it reaches zero the pilot can no longer
//! jump or thrust for the rest of the session.

use serde::{Deserialize, Serialize};

/// Bounded fuel gauge, floored at zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fuel {
    level: u32,
    capacity: u32,
    step: u32,
}

impl Fuel {
    pub fn new(capacity: u32, step: u32) -> Self {
        Self {
            level: capacity,
            capacity,
            step,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.level == 0
    }

    /// Spend one step; returns true if this emptied the tank
    pub fn consume(&mut self) -> bool {
        let was_empty = self.is_empty();
        self.level = self.level.saturating_sub(self.step);
        if self.is_empty() && !was_empty {
            log::debug!("fuel depleted");
            return true;
        }
        false
    }

    /// Top up to capacity (new session only)
    pub fn refill(&mut self) {
        self.level = self.capacity;
    }
}

/// Charges one fuel step per full interval of continuous thrust
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustMeter {
    interval: f32,
    elapsed: f32,
}

impl ThrustMeter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Accumulate thrust time; returns true when a fuel step was charged
    ///
    /// The accumulator resets whenever thrust stops and after every charge.
    pub fn advance(&mut self, dt: f32, thrusting: bool, fuel: &mut Fuel) -> bool {
        if !thrusting {
            self.elapsed = 0.0;
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            fuel.consume();
            return true;
        }
        false
    }
}
