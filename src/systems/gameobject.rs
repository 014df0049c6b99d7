//! Per-object update.
//!
//! An [`ObjectPass`] is one update pass over the scene: it builds the object
//! query and reads the input once, then updates objects and groups through
//! it. The base game-object update hands the object's controller (if any)
//! the current input, then applies its drift (if any). An object with
//! neither is left untouched. Each object is updated at most once per pass.
use bevy_ecs::prelude::*;
use log::trace;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::inputcontrolled::{ControlContext, InputControlled};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;

type ObjectQuery = (
    &'static mut MapPosition,
    &'static BoxCollider,
    Option<&'static mut InputControlled>,
    Option<&'static RigidBody>,
);

pub struct ObjectPass {
    query: QueryState<ObjectQuery>,
    input: InputState,
    screen: ScreenSize,
    visited: FxHashSet<Entity>,
}

impl ObjectPass {
    pub fn new(world: &mut World) -> Self {
        Self {
            query: world.query::<ObjectQuery>(),
            input: world.get_resource::<InputState>().cloned().unwrap_or_default(),
            screen: world
                .get_resource::<ScreenSize>()
                .copied()
                .unwrap_or(ScreenSize::new(0, 0)),
            visited: FxHashSet::default(),
        }
    }

    /// Update one object. Returns `false` when it was already updated in this
    /// pass or is not a live game object (despawned, or missing
    /// position/size), in which case nothing happens.
    pub fn update_object(&mut self, world: &mut World, entity: Entity) -> bool {
        if !self.visited.insert(entity) {
            return false;
        }
        let Ok((mut position, collider, controlled, rigidbody)) = self.query.get_mut(world, entity) else {
            trace!("skipping {:?}: not a live game object", entity);
            return false;
        };

        if let Some(mut controlled) = controlled {
            let ctx = ControlContext {
                input: &self.input,
                screen: self.screen,
            };
            controlled
                .controller_mut()
                .update(&ctx, &mut position, collider);
        }

        if let Some(rigidbody) = rigidbody {
            position.x += rigidbody.velocity_x;
            position.y += rigidbody.velocity_y;
        }

        true
    }

    /// Update every live member of `group` in insertion order. Returns the
    /// number of members updated.
    pub fn update_group(&mut self, world: &mut World, group: Entity) -> usize {
        let members = match world.get::<Group>(group) {
            Some(g) => g.members().to_vec(),
            None => return 0,
        };
        let mut updated = 0;
        for member in members {
            if self.update_object(world, member) {
                updated += 1;
            }
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::gameobject::GameObject;
    use crate::components::inputcontrolled::KeyboardController;
    use crate::resources::input::Key;

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(InputState::default());
        world.insert_resource(ScreenSize::new(640, 480));
        world
    }

    #[test]
    fn test_plain_object_update_is_noop() {
        let mut world = make_world();
        let e = world.spawn(GameObject::new(10.0, 20.0, 5.0, 5.0)).id();
        assert!(ObjectPass::new(&mut world).update_object(&mut world, e));
        assert_eq!(*world.get::<MapPosition>(e).unwrap(), MapPosition::new(10.0, 20.0));
    }

    #[test]
    fn test_controller_moves_object() {
        let mut world = make_world();
        world.resource_mut::<InputState>().set_key(Key::Up, true);
        let e = world
            .spawn((
                GameObject::new(100.0, 100.0, 32.0, 32.0),
                InputControlled::new(KeyboardController::arrows(8.0)),
            ))
            .id();
        ObjectPass::new(&mut world).update_object(&mut world, e);
        assert_eq!(world.get::<MapPosition>(e).unwrap().y, 92.0);
    }

    #[test]
    fn test_rigidbody_drifts_object() {
        let mut world = make_world();
        let e = world
            .spawn((GameObject::new(0.0, 50.0, 5.0, 5.0), RigidBody::new(1.0, 0.0)))
            .id();
        ObjectPass::new(&mut world).update_object(&mut world, e);
        ObjectPass::new(&mut world).update_object(&mut world, e);
        assert_eq!(world.get::<MapPosition>(e).unwrap().x, 2.0);
    }

    #[test]
    fn test_object_updates_once_per_pass() {
        let mut world = make_world();
        let e = world
            .spawn((GameObject::new(0.0, 50.0, 5.0, 5.0), RigidBody::new(1.0, 0.0)))
            .id();
        let mut pass = ObjectPass::new(&mut world);
        assert!(pass.update_object(&mut world, e));
        assert!(!pass.update_object(&mut world, e));
        assert_eq!(world.get::<MapPosition>(e).unwrap().x, 1.0);
    }

    #[test]
    fn test_despawned_object_is_skipped() {
        let mut world = make_world();
        let e = world.spawn(GameObject::new(0.0, 0.0, 1.0, 1.0)).id();
        world.despawn(e);
        assert!(!ObjectPass::new(&mut world).update_object(&mut world, e));
    }

    #[test]
    fn test_update_group_skips_holes_and_updated() {
        let mut world = make_world();
        let a = world
            .spawn((GameObject::new(0.0, 0.0, 1.0, 1.0), RigidBody::new(1.0, 0.0)))
            .id();
        let b = world
            .spawn((GameObject::new(0.0, 0.0, 1.0, 1.0), RigidBody::new(1.0, 0.0)))
            .id();
        let c = world
            .spawn((GameObject::new(0.0, 0.0, 1.0, 1.0), RigidBody::new(1.0, 0.0)))
            .id();
        let mut group = Group::new("g");
        group.push(a);
        group.push(b);
        group.push(c);
        let g = world.spawn(group).id();
        world.despawn(b);

        let mut pass = ObjectPass::new(&mut world);
        assert!(pass.update_object(&mut world, c));
        assert_eq!(pass.update_group(&mut world, g), 1);
        assert_eq!(world.get::<MapPosition>(a).unwrap().x, 1.0);
        assert_eq!(world.get::<MapPosition>(c).unwrap().x, 1.0);
    }
}
