use bevy_ecs::prelude::Component;

use crate::surface::Color;

/// Solid fill of the object's whole box.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillRect {
    pub color: Color,
}

impl FillRect {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}
