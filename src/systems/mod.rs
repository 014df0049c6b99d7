//! Per-frame object passes.
//!
//! Submodules overview
//! - [`gameobject`] – run an object's controller and drift, alone or per group
//! - [`render`] – draw an object from its visual components, alone or per group
//! - [`time`] – advance [`crate::resources::worldtime::WorldTime`]

pub mod gameobject;
pub mod render;
pub mod time;
