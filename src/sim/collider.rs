//! Axis-aligned box colliders
//!
//! Boxes are center-anchored: `dimensions` is the full width/height, so the
//! half-extent on each axis is `dimensions / 2`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A snapshot of one entity's collision box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub center: Vec2,
    pub dimensions: Vec2,
    /// Inactive colliders never overlap anything
    pub active: bool,
}

impl Collider {
    pub fn new(center: Vec2, dimensions: Vec2) -> Self {
        Self {
            center,
            dimensions,
            active: true,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.dimensions * 0.5
    }

    /// Same box grown (or shrunk) about its center
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            dimensions: self.dimensions * factor,
            ..*self
        }
    }

    /// Top-left and bottom-right corners
    pub fn corners(&self) -> (Vec2, Vec2) {
        let half = self.half_extents();
        (self.center - half, self.center + half)
    }

    /// Strict AABB overlap: on both axes the center distance must be less
    /// than the summed half-extents. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Collider) -> bool {
        if !self.active || !other.active {
            return false;
        }
        let gap = (self.center - other.center).abs() - (self.half_extents() + other.half_extents());
        gap.x < 0.0 && gap.y < 0.0
    }

    /// Overlap magnitude along x (see [`axis_overlap`])
    #[inline]
    pub fn overlap_x(&self, other: &Collider) -> f32 {
        axis_overlap(
            self.center.x,
            other.center.x,
            self.dimensions.x,
            other.dimensions.x,
        )
    }

    /// Overlap magnitude along y (see [`axis_overlap`])
    #[inline]
    pub fn overlap_y(&self, other: &Collider) -> f32 {
        axis_overlap(
            self.center.y,
            other.center.y,
            self.dimensions.y,
            other.dimensions.y,
        )
    }
}

/// `| |a - b| - (size_a / 2 + size_b / 2) |`
///
/// Equals penetration depth only when the boxes overlap on this axis; for
/// separated boxes it returns the gap instead. Callers check
/// [`Collider::overlaps`] first.
#[inline]
pub fn axis_overlap(a: f32, b: f32, size_a: f32, size_b: f32) -> f32 {
    ((a - b).abs() - size_a / 2.0 - size_b / 2.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_and_separation() {
        let a = Collider::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Collider::new(Vec2::new(8.0, 8.0), Vec2::new(10.0, 10.0));
        let c = Collider::new(Vec2::new(8.0, 30.0), Vec2::new(10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Overlaps on x only
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Collider::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Collider::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_inactive_never_overlaps() {
        let a = Collider::new(Vec2::ZERO, Vec2::splat(10.0));
        let mut b = a;
        b.active = false;
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_axis_overlap_is_depth_when_overlapping() {
        // Centers 30 apart, half heights 20 + 20 -> 10 deep
        assert!((axis_overlap(100.0, 130.0, 40.0, 40.0) - 10.0).abs() < 1e-5);
        // Separated by 5: the formula reports the gap, not a depth
        assert!((axis_overlap(0.0, 45.0, 40.0, 40.0) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_scaled_keeps_center() {
        let a = Collider::new(Vec2::new(50.0, 50.0), Vec2::new(60.0, 30.0)).scaled(1.1);
        assert_eq!(a.center, Vec2::new(50.0, 50.0));
        assert!((a.dimensions.x - 66.0).abs() < 1e-4);
        let (min, max) = a.corners();
        assert!((max.x - min.x - 66.0).abs() < 1e-4);
    }
}
