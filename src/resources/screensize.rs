//! Screen size resource.
//!
//! Stores the canvas dimensions in pixels. Physics uses it for the wall and
//! inside-the-canvas tests, controllers use it to clamp movement and the
//! scene uses it to clear and repaint the background.

use bevy_ecs::prelude::Resource;

/// Current canvas size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }

    /// Whether a point lies on the canvas: closed at the top-left edges, open
    /// at the bottom-right ones.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x < self.width() && y >= 0.0 && y < self.height()
    }
}
