//! Error types shared by the scene, physics registry and game driver.
//!
//! - [`ConfigurationError`] – invalid setup (registering or adding something
//!   that cannot take part in the frame loop). Reported when the scene is
//!   built, never mid-frame.
//! - [`CallbackError`] – returned by collision callbacks. The physics registry
//!   logs it and moves on to the next rule.
//! - [`GameError`] – anything that stops the driver from starting.

use bevy_ecs::entity::Entity;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The entity is gone, or lacks a position or a collider.
    #[error("entity {0:?} has no position/size and cannot be used here")]
    NotAGameObject(Entity),
    /// A group operation was given something that is not a group.
    #[error("entity {0:?} is not a group")]
    NotAGroup(Entity),
    /// `Scene::add` was given something that is neither an object nor a group.
    #[error("entity {0:?} is neither a game object nor a group")]
    NotAddable(Entity),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallbackError {
    #[error("entity {0:?} is missing component {1}")]
    MissingComponent(Entity, &'static str),
    #[error("{0}")]
    Other(String),
}

impl CallbackError {
    pub fn other(message: impl Into<String>) -> Self {
        CallbackError::Other(message.into())
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("backend error: {0}")]
    Backend(String),
}
