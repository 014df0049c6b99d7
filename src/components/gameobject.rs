//! The minimal game object: a position and a size.
//!
//! Every entity the scene updates, renders or tests for collisions carries at
//! least this bundle. What an object does beyond sitting still comes from the
//! optional components added next to it:
//! - [`InputControlled`](super::inputcontrolled::InputControlled) – moved by a controller
//! - [`RigidBody`](super::rigidbody::RigidBody) – constant drift
//! - [`FillRect`](super::fillrect::FillRect), [`Sprite`](super::sprite::Sprite),
//!   [`DynamicText`](super::dynamictext::DynamicText) – how it is drawn
//! - [`Command`](super::command::Command) – free-form state tag

use bevy_ecs::prelude::Bundle;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;

#[derive(Bundle, Clone, Copy, Debug)]
pub struct GameObject {
    pub position: MapPosition,
    pub collider: BoxCollider,
}

impl GameObject {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: MapPosition::new(x, y),
            collider: BoxCollider::new(width, height),
        }
    }
}
