//! Debug toggle resource.
//!
//! The mere presence of this resource in the scene's world turns on the
//! collision overlay. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the scene strokes every pair rule's box.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
