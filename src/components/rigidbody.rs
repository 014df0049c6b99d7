//! Constant drift component.
//!
//! There is no timestep in the frame loop, so velocity is expressed in pixels
//! per frame and added to [`MapPosition`](super::mapposition::MapPosition)
//! once per object update.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct RigidBody {
    /// Horizontal velocity in pixels per frame.
    pub velocity_x: f32,
    /// Vertical velocity in pixels per frame.
    pub velocity_y: f32,
}

impl RigidBody {
    pub fn new(velocity_x: f32, velocity_y: f32) -> Self {
        Self {
            velocity_x,
            velocity_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_at_rest() {
        let rb = RigidBody::default();
        assert_eq!(rb, RigidBody::new(0.0, 0.0));
    }

    #[test]
    fn test_new_sets_velocity() {
        let rb = RigidBody::new(-1.0, 0.0);
        assert_eq!(rb.velocity_x, -1.0);
        assert_eq!(rb.velocity_y, 0.0);
    }
}
