//! World-edge policy and goal/hazard contact tests
//!
//! These are caller-level rules layered on the entity core. They use the
//! same strict box-overlap predicate as entity collisions, applied to render
//! scale rather than collider dimensions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collider::Collider;
use super::entity::Entity;
use crate::render::Texture;

/// Rectangular play field `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

/// Which world edges an entity was pushed back from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeContact {
    /// Left or right wall
    pub wall: bool,
    pub ceiling: bool,
    pub floor: bool,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Keep an entity inside the field
    ///
    /// Walls and ceiling reflect velocity scaled by the entity's bounciness.
    /// The floor stops the entity dead.
    pub fn confine<T: Texture>(&self, entity: &mut Entity<T>) -> EdgeContact {
        let mut pos = entity.position();
        let mut vel = entity.velocity();
        let half = entity.scale() * 0.5;
        let b = entity.bounciness();
        let mut contact = EdgeContact::default();

        if pos.x - half.x < 0.0 {
            pos.x = half.x;
            vel.x = -vel.x * b;
            contact.wall = true;
        } else if pos.x + half.x > self.width {
            pos.x = self.width - half.x;
            vel.x = -vel.x * b;
            contact.wall = true;
        }

        if pos.y - half.y < 0.0 {
            pos.y = half.y;
            vel.y = -vel.y * b;
            contact.ceiling = true;
        } else if pos.y + half.y > self.height {
            pos.y = self.height - half.y;
            vel = Vec2::ZERO;
            contact.floor = true;
        }

        entity.set_position(pos);
        entity.set_velocity(vel);
        contact
    }
}

/// Whether `mover` touches `target`'s box grown by `expansion`
pub fn reaches<T: Texture>(mover: &Entity<T>, target: &Entity<T>, expansion: f32) -> bool {
    let me = Collider {
        active: mover.is_active(),
        ..Collider::new(mover.position(), mover.scale())
    };
    let zone = Collider {
        active: target.is_active(),
        ..Collider::new(target.position(), target.scale())
    }
    .scaled(expansion);
    me.overlaps(&zone)
}
