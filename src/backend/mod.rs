//! Host backends that own a real window.
//!
//! Headless runs draw into a [`RecordingSurface`](crate::surface::RecordingSurface)
//! and need nothing from here.

#[cfg(feature = "raylib")]
pub mod window;
