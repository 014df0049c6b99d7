//! Asteroid Dodge library.
//!
//! A small frame-driven game framework (scene, groups, collision rules, input
//! controllers, frame scheduler) and the two-player asteroid-dodge level built
//! on it. Exposed as a library for the binary and the integration tests.

pub mod backend;
pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod level;
pub mod physics;
pub mod resources;
pub mod scene;
pub mod scheduler;
pub mod surface;
pub mod systems;
pub mod util;
