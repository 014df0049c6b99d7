//! Resources stored in a scene's world, plus the game configuration.
//!
//! Overview
//! - `debugmode` – presence turns on the collision debug overlay
//! - `gameconfig` – INI-backed settings (canvas size, pacing, tuning)
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `screensize` – canvas dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs (window backend only)
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
#[cfg(feature = "raylib")]
pub mod texturestore;
pub mod worldtime;
