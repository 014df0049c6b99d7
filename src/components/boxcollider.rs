//! Axis-aligned box of a game object.
//!
//! The collider is the object's size; its top-left corner is the entity's
//! [`MapPosition`]. All collision tests in the crate go through here so the
//! containment and wall policies live in one place:
//! - [`BoxCollider::contains`] – box-in-box containment used by pair rules
//! - [`BoxCollider::crosses_bounds`] – wall test used by wall rules

use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;
use crate::resources::screensize::ScreenSize;

/// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
pub type Aabb = (f32, f32, f32, f32);

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: MapPosition) -> Aabb {
        let (x0, y0) = (position.x, position.y);
        let (x1, y1) = (x0 + self.width, y0 + self.height);
        (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }

    /// Box-in-box containment: `other` lies entirely inside `self`.
    ///
    /// Near edges are closed (`>=`) and far edges open (`<`), so a box that
    /// shares the container's top-left corner is inside while one that
    /// reaches the container's far edge is not.
    pub fn contains(&self, position: MapPosition, other: &Self, other_position: MapPosition) -> bool {
        let (min_ax, min_ay, max_ax, max_ay) = self.aabb(position);
        let (min_bx, min_by, max_bx, max_by) = other.aabb(other_position);
        min_bx >= min_ax && min_by >= min_ay && max_bx < max_ax && max_by < max_ay
    }

    /// Whether the box has crossed any canvas edge. Touching the bottom edge
    /// is still inside; touching the right edge counts as a crossing.
    pub fn crosses_bounds(&self, position: MapPosition, screen: ScreenSize) -> bool {
        let (min_x, min_y, max_x, max_y) = self.aabb(position);
        min_y < 0.0 || max_y > screen.height() || min_x < 0.0 || max_x >= screen.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f32, y: f32) -> MapPosition {
        MapPosition::new(x, y)
    }

    #[test]
    fn test_aabb_normalizes_negative_size() {
        let c = BoxCollider::new(-10.0, -150.0);
        assert_eq!(c.aabb(pos(320.0, 480.0)), (310.0, 330.0, 320.0, 480.0));
    }

    #[test]
    fn test_contains_small_box_inside() {
        let a = BoxCollider::new(100.0, 100.0);
        let b = BoxCollider::new(20.0, 20.0);
        assert!(a.contains(pos(0.0, 0.0), &b, pos(10.0, 10.0)));
    }

    #[test]
    fn test_contains_rejects_escaping_box() {
        let a = BoxCollider::new(100.0, 100.0);
        let b = BoxCollider::new(200.0, 200.0);
        assert!(!a.contains(pos(0.0, 0.0), &b, pos(10.0, 10.0)));
    }

    #[test]
    fn test_contains_near_edge_closed_far_edge_open() {
        let a = BoxCollider::new(100.0, 100.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(a.contains(pos(0.0, 0.0), &b, pos(0.0, 0.0)));
        assert!(!a.contains(pos(0.0, 0.0), &b, pos(90.0, 50.0)));
        assert!(!a.contains(pos(0.0, 0.0), &b, pos(50.0, 90.0)));
    }

    #[test]
    fn test_contains_is_not_symmetric() {
        let big = BoxCollider::new(32.0, 32.0);
        let small = BoxCollider::new(5.0, 5.0);
        assert!(big.contains(pos(100.0, 100.0), &small, pos(110.0, 110.0)));
        assert!(!small.contains(pos(110.0, 110.0), &big, pos(100.0, 100.0)));
    }

    #[test]
    fn test_crosses_bounds_top() {
        let screen = ScreenSize::new(640, 480);
        let c = BoxCollider::new(32.0, 32.0);
        assert!(c.crosses_bounds(pos(100.0, -1.0), screen));
    }

    #[test]
    fn test_crosses_bounds_each_edge() {
        let screen = ScreenSize::new(640, 480);
        let c = BoxCollider::new(32.0, 32.0);
        assert!(c.crosses_bounds(pos(-1.0, 100.0), screen));
        assert!(c.crosses_bounds(pos(609.0, 100.0), screen));
        assert!(c.crosses_bounds(pos(100.0, 449.0), screen));
    }

    #[test]
    fn test_fully_inside_does_not_cross() {
        let screen = ScreenSize::new(640, 480);
        let c = BoxCollider::new(32.0, 32.0);
        assert!(!c.crosses_bounds(pos(0.0, 0.0), screen));
        assert!(!c.crosses_bounds(pos(607.0, 448.0), screen));
        assert!(!c.crosses_bounds(pos(300.0, 200.0), screen));
    }

    #[test]
    fn test_right_edge_touch_crosses_bottom_touch_does_not() {
        let screen = ScreenSize::new(640, 480);
        let c = BoxCollider::new(32.0, 32.0);
        assert!(c.crosses_bounds(pos(608.0, 100.0), screen));
        assert!(!c.crosses_bounds(pos(100.0, 448.0), screen));
    }
}
