//! Ordered collection of game objects.
//!
//! A [`Group`] lives on its own entity and holds references to member
//! entities, in insertion order. It lets a whole set of objects (an asteroid
//! field) be added to a scene or registered in a collision rule as one
//! participant.
//!
//! The group is the authoritative, live membership. Members that have been
//! despawned without being removed are left as holes; every pass over a group
//! skips them.

use bevy_ecs::prelude::{Component, Entity};

#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct Group {
    name: String,
    members: Vec<Entity>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.members.contains(&entity)
    }

    pub fn push(&mut self, entity: Entity) {
        self.members.push(entity);
    }

    /// Remove one member. Returns whether it was present.
    pub fn remove(&mut self, entity: Entity) -> bool {
        match self.members.iter().position(|e| *e == entity) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Keep the members for which `keep` returns true, preserving order.
    ///
    /// Every member is looked at exactly once no matter how many are removed.
    /// Returns the removed members in their original order.
    pub fn retain(&mut self, mut keep: impl FnMut(Entity) -> bool) -> Vec<Entity> {
        let mut removed = Vec::new();
        self.members.retain(|&e| {
            if keep(e) {
                true
            } else {
                removed.push(e);
                false
            }
        });
        removed
    }
}
