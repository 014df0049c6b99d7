//! Input-controlled movement components.
//!
//! A game object may own exactly one [`InputController`] through the
//! [`InputControlled`] component. Once per frame the object update hands the
//! controller the current [`InputState`] and the object's position so it can
//! move the object.
//!
//! [`KeyboardController`] is the stock implementation: an up/down key pair
//! and a per-frame velocity, with WASD and arrow-key presets.

use bevy_ecs::prelude::Component;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::resources::input::{InputState, Key};
use crate::resources::screensize::ScreenSize;

/// What a controller gets to look at while updating its object.
#[derive(Debug, Clone, Copy)]
pub struct ControlContext<'a> {
    pub input: &'a InputState,
    pub screen: ScreenSize,
}

/// Capability: move one object from the current input state.
pub trait InputController: Send + Sync + 'static {
    fn update(&mut self, ctx: &ControlContext<'_>, position: &mut MapPosition, collider: &BoxCollider);
}

/// Exclusive ownership of an object's controller.
#[derive(Component)]
pub struct InputControlled {
    controller: Box<dyn InputController>,
}

impl InputControlled {
    pub fn new(controller: impl InputController) -> Self {
        Self {
            controller: Box::new(controller),
        }
    }

    pub fn controller_mut(&mut self) -> &mut dyn InputController {
        self.controller.as_mut()
    }
}

/// Movement picked from the current key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Up/down keyboard binding.
///
/// Moving up is unrestricted (leaving through the top is how a ship scores).
/// Moving down only happens while the object's bottom edge is above the
/// bottom of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardController {
    up: Key,
    down: Key,
    velocity: f32,
}

impl KeyboardController {
    pub fn new(up: Key, down: Key, velocity: f32) -> Self {
        Self {
            up,
            down,
            velocity,
        }
    }

    /// W / S binding.
    pub fn wasd(velocity: f32) -> Self {
        Self::new(Key::W, Key::S, velocity)
    }

    /// Arrow up / arrow down binding.
    pub fn arrows(velocity: f32) -> Self {
        Self::new(Key::Up, Key::Down, velocity)
    }
}

impl InputController for KeyboardController {
    fn update(&mut self, ctx: &ControlContext<'_>, position: &mut MapPosition, collider: &BoxCollider) {
        let direction = if ctx.input.is_down(self.up) {
            Some(Direction::Up)
        } else if ctx.input.is_down(self.down) {
            Some(Direction::Down)
        } else {
            None
        };

        match direction {
            Some(Direction::Up) => position.y -= self.velocity,
            Some(Direction::Down) => {
                if position.y + collider.height < ctx.screen.height() {
                    position.y += self.velocity;
                }
            }
            None => {}
        }
    }
}
