//! Event types and observers.
//!
//! Submodules:
//! - [`switchdebug`] – toggle the collision debug overlay

pub mod switchdebug;
