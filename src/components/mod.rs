//! ECS components for game objects.
//!
//! A game object is an entity with a [`mapposition::MapPosition`] and a
//! [`boxcollider::BoxCollider`]. Everything else is optional and decides how
//! the object moves and how it is drawn.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned box, containment and wall-crossing tests
//! - [`command`] – free-form tag carried by an object
//! - [`dynamictext`] – text drawn at the object's position
//! - [`fillrect`] – solid rectangle covering the object's box
//! - [`gameobject`] – bundle of position and box
//! - [`group`] – ordered, named collection of objects
//! - [`inputcontrolled`] – input controllers that move an object
//! - [`mapposition`] – canvas position of the object's top-left corner
//! - [`rigidbody`] – constant per-frame drift
//! - [`sprite`] – texture drawn over the object's box

pub mod boxcollider;
pub mod command;
pub mod dynamictext;
pub mod fillrect;
pub mod gameobject;
pub mod group;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
