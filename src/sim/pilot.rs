//! Player control: jump requests and fuel-gated thrust

use serde::{Deserialize, Serialize};

use super::fuel::{Fuel, ThrustMeter};
use crate::tuning::Physics;

/// Control state attached to player entities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    pub fuel: Fuel,
    pub meter: ThrustMeter,
    /// Upward velocity change per jump
    pub jump_power: f32,
    /// Horizontal acceleration while thrusting
    pub thrust: f32,
    jump_pending: bool,
}

impl Pilot {
    pub fn new(physics: &Physics) -> Self {
        Self {
            fuel: Fuel::new(physics.fuel_capacity, physics.fuel_step),
            meter: ThrustMeter::new(physics.thrust_fuel_interval),
            jump_power: physics.jump_power,
            thrust: physics.thrust,
            jump_pending: false,
        }
    }

    /// Ask for a jump on the next update
    ///
    /// Every attempt costs fuel, including the ones refused for lack of it.
    pub fn request_jump(&mut self) -> bool {
        let accepted = !self.fuel.is_empty();
        if accepted {
            self.jump_pending = true;
        }
        self.fuel.consume();
        accepted
    }

    pub fn is_jump_pending(&self) -> bool {
        self.jump_pending
    }

    /// Consume a pending jump, yielding its impulse
    pub fn take_jump(&mut self) -> Option<f32> {
        if std::mem::take(&mut self.jump_pending) {
            Some(self.jump_power)
        } else {
            None
        }
    }

    /// Horizontal acceleration for a thrust in `sign` direction, if fuel allows
    pub fn thrust_toward(&self, sign: f32) -> Option<f32> {
        if self.fuel.is_empty() {
            None
        } else {
            Some(self.thrust * sign.signum())
        }
    }
}
