//! Per-axis collision response with bounce
//!
//! The mover is resolved against its candidates one axis at a time: Y first,
//! then X. Candidates are visited in slice order and each one is re-tested
//! against the mover's already-corrected position; there is no sorting by
//! penetration depth. A candidate only gets a response while the mover is
//! still travelling into it, so the first contact that stops or reverses the
//! motion on an axis wins.

use std::borrow::Borrow;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collider::Collider;
use super::kinematics::Kinematics;

/// Which sides of the mover touched something this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Restitution parameters of a mover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    /// 0 = dead stop, 1 = perfect rebound
    pub bounciness: f32,
    /// Rebound speeds below this snap to zero
    pub min_velocity: f32,
    /// Minimum vertical overlap before a horizontal contact counts
    pub y_threshold: f32,
}

/// Reflect and damp one velocity component
///
/// Returns `-v * bounciness`, or zero when that rebound is slower than
/// `min_velocity`.
#[inline]
pub fn rebound(v: f32, bounce: &Bounce) -> f32 {
    let out = -v * bounce.bounciness;
    if out.abs() < bounce.min_velocity {
        0.0
    } else {
        out
    }
}

/// Push the mover out along one axis against its heading and reflect its speed
fn push_out(position: &mut f32, velocity: &mut f32, heading: f32, depth: f32, bounce: &Bounce) {
    if heading > 0.0 {
        *position -= depth;
    } else {
        *position += depth;
    }
    *velocity = rebound(*velocity, bounce);
}

/// Resolve vertical contacts
pub fn resolve_y<I>(
    kin: &mut Kinematics,
    dimensions: Vec2,
    bounce: &Bounce,
    candidates: I,
    flags: &mut CollisionFlags,
) where
    I: IntoIterator,
    I::Item: Borrow<Collider>,
{
    let heading = kin.velocity.y;
    if heading == 0.0 {
        return;
    }

    for other in candidates {
        if kin.velocity.y * heading <= 0.0 {
            break;
        }
        let other = other.borrow();
        let me = Collider::new(kin.position, dimensions);
        if !me.overlaps(other) {
            continue;
        }

        let depth = me.overlap_y(other);
        push_out(&mut kin.position.y, &mut kin.velocity.y, heading, depth, bounce);
        if heading > 0.0 {
            flags.bottom = true;
        } else {
            flags.top = true;
        }
    }
}

/// Resolve horizontal contacts
///
/// A mover resting on a platform sinks a fraction of a pixel into it every
/// frame before the Y pass pushes it back out. Contacts whose vertical overlap
/// is below `y_threshold` are therefore skipped so the floor never acts as a
/// wall.
pub fn resolve_x<I>(
    kin: &mut Kinematics,
    dimensions: Vec2,
    bounce: &Bounce,
    candidates: I,
    flags: &mut CollisionFlags,
) where
    I: IntoIterator,
    I::Item: Borrow<Collider>,
{
    let heading = kin.velocity.x;
    if heading == 0.0 {
        return;
    }

    for other in candidates {
        if kin.velocity.x * heading <= 0.0 {
            break;
        }
        let other = other.borrow();
        let me = Collider::new(kin.position, dimensions);
        if !me.overlaps(other) {
            continue;
        }

        if me.overlap_y(other) < bounce.y_threshold {
            continue;
        }

        let depth = me.overlap_x(other);
        push_out(&mut kin.position.x, &mut kin.velocity.x, heading, depth, bounce);
        if heading > 0.0 {
            flags.right = true;
        } else {
            flags.left = true;
        }
    }
}
