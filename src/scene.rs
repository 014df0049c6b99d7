//! Scene: the objects, groups and collision rules of one level.
//!
//! A [`Scene`] owns a bevy_ecs [`World`] holding every game object, the
//! ordered list of top-level objects (`children`), the list of groups, and
//! one [`Physics`] registry. Each frame the game driver calls
//! [`Scene::update`] then [`Scene::render`]:
//!
//! 1. update every child, then every group, then evaluate collision rules
//! 2. run the level's own update hook
//! 3. clear the surface, fill the background, render every child then every
//!    group, draw the debug overlay when enabled, run the level's render hook
//!
//! # Group membership
//!
//! `add(group)` copies the group's current members into `children` (a one-time
//! snapshot) and records the group itself. The group keeps the live
//! membership: objects pushed into it later are reached through the group
//! pass only. Within one pass an object is visited at most once, so a member
//! that is both a snapshot child and a group member is updated and drawn once.

use bevy_ecs::prelude::*;
use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::error::{CallbackError, ConfigurationError};
use crate::events::switchdebug::switch_debug_observer;
use crate::physics::{Physics, PhysicsReport};
use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::surface::{Color, DrawSurface};
use crate::systems::gameobject::ObjectPass;
use crate::systems::render::{render_group, render_object};

/// Level-specific behavior layered on top of a scene.
///
/// All hooks default to doing nothing. `update` runs after the scene's own
/// update (objects and physics), `render` after the scene's own render.
pub trait Level {
    /// Build the level's objects and rules. Called once, before the first frame.
    fn create(&mut self, _scene: &mut Scene) -> Result<(), ConfigurationError> {
        Ok(())
    }

    fn update(&mut self, _scene: &mut Scene) {}

    fn render(&self, _scene: &Scene, _surface: &mut dyn DrawSurface) {}
}

pub struct Scene {
    world: World,
    children: Vec<Entity>,
    groups: Vec<Entity>,
    physics: Physics,
    background: Color,
    level: Option<Box<dyn Level>>,
    last_report: PhysicsReport,
}

impl Scene {
    /// Empty scene for a canvas of the given size, black background.
    pub fn new(screen: ScreenSize) -> Self {
        let mut world = World::new();
        world.insert_resource(screen);
        world.insert_resource(InputState::default());
        world.insert_resource(WorldTime::default());
        world.spawn(Observer::new(switch_debug_observer));
        world.flush();
        Self {
            world,
            children: Vec::new(),
            groups: Vec::new(),
            physics: Physics::new(),
            background: Color::BLACK,
            level: None,
            last_report: PhysicsReport::default(),
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_level(mut self, level: impl Level + 'static) -> Self {
        self.level = Some(Box::new(level));
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    pub fn screen(&self) -> ScreenSize {
        *self.world.resource::<ScreenSize>()
    }

    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    pub fn groups(&self) -> &[Entity] {
        &self.groups
    }

    /// Outcome of the last physics pass.
    pub fn last_physics_report(&self) -> PhysicsReport {
        self.last_report
    }

    pub fn set_debug(&mut self, enabled: bool) {
        if enabled {
            self.world.insert_resource(DebugMode {});
        } else {
            self.world.remove_resource::<DebugMode>();
        }
    }

    pub fn is_debug(&self) -> bool {
        self.world.contains_resource::<DebugMode>()
    }

    /// Spawn an entity in the scene's world without adding it to the frame
    /// loop. Use [`Scene::add`] or a group to make it take part.
    pub fn spawn(&mut self, bundle: impl Bundle) -> Entity {
        self.world.spawn(bundle).id()
    }

    /// Spawn an empty group.
    pub fn spawn_group(&mut self, name: impl Into<String>) -> Entity {
        self.world.spawn(Group::new(name)).id()
    }

    pub fn group(&self, group: Entity) -> Option<&Group> {
        self.world.get::<Group>(group)
    }

    /// Add an object or a group to the frame loop.
    ///
    /// A group's current members are copied into `children` and the group is
    /// recorded for the group pass. A game object goes into `children`.
    pub fn add(&mut self, entity: Entity) -> Result<(), ConfigurationError> {
        if let Some(group) = self.world.get::<Group>(entity) {
            let members = group.members().to_vec();
            debug!(
                "scene add group {:?} '{}' ({} members)",
                entity,
                group.name(),
                members.len()
            );
            self.children.extend(members);
            self.groups.push(entity);
            return Ok(());
        }
        if self.world.get::<MapPosition>(entity).is_some()
            && self.world.get::<BoxCollider>(entity).is_some()
        {
            self.children.push(entity);
            return Ok(());
        }
        Err(ConfigurationError::NotAddable(entity))
    }

    /// Append an object to a group's live membership.
    pub fn push_to_group(&mut self, group: Entity, entity: Entity) -> Result<(), ConfigurationError> {
        let mut g = self
            .world
            .get_mut::<Group>(group)
            .ok_or(ConfigurationError::NotAGroup(group))?;
        g.push(entity);
        Ok(())
    }

    /// Remove from a group every member for which `doomed` returns true and
    /// despawn it. Every member is checked exactly once.
    ///
    /// Returns the removed members, in group order.
    pub fn remove_from_group_where(
        &mut self,
        group: Entity,
        mut doomed: impl FnMut(&World, Entity) -> bool,
    ) -> Result<Vec<Entity>, ConfigurationError> {
        let members = self
            .world
            .get::<Group>(group)
            .ok_or(ConfigurationError::NotAGroup(group))?
            .members()
            .to_vec();
        let marked: FxHashSet<Entity> = members
            .into_iter()
            .filter(|&e| doomed(&self.world, e))
            .collect();
        if marked.is_empty() {
            return Ok(Vec::new());
        }
        let removed = match self.world.get_mut::<Group>(group) {
            Some(mut g) => g.retain(|e| !marked.contains(&e)),
            None => Vec::new(),
        };
        for &e in &removed {
            self.world.despawn(e);
        }
        Ok(removed)
    }

    /// Register a pair collision rule. See [`Physics::on_collide`].
    pub fn on_collide<F>(
        &mut self,
        object_a: Entity,
        object_b: Entity,
        callback: F,
    ) -> Result<usize, ConfigurationError>
    where
        F: FnMut(&mut World, Entity, Entity) -> Result<(), CallbackError> + 'static,
    {
        self.physics
            .on_collide(&self.world, object_a, object_b, callback)
    }

    /// Register a wall collision rule. See [`Physics::on_collide_walls`].
    pub fn on_collide_walls<F>(&mut self, object_a: Entity, callback: F) -> Result<(), ConfigurationError>
    where
        F: FnMut(&mut World, Entity) -> Result<(), CallbackError> + 'static,
    {
        self.physics
            .on_collide_walls(&self.world, object_a, callback)
    }

    /// Run the level's `create` hook.
    pub fn create(&mut self) -> Result<(), ConfigurationError> {
        let Some(mut level) = self.level.take() else {
            return Ok(());
        };
        let result = level.create(self);
        self.level = Some(level);
        if result.is_ok() {
            info!(
                "scene created: {} children, {} groups, {} pair rules, {} wall rules",
                self.children.len(),
                self.groups.len(),
                self.physics.pair_rule_count(),
                self.physics.wall_rule_count()
            );
        }
        result
    }

    /// One update pass: children, groups, physics, then the level hook.
    pub fn update(&mut self) {
        let mut pass = ObjectPass::new(&mut self.world);
        for &child in &self.children {
            pass.update_object(&mut self.world, child);
        }
        for &group in &self.groups {
            pass.update_group(&mut self.world, group);
        }
        self.last_report = self.physics.update(&mut self.world);

        if let Some(mut level) = self.level.take() {
            level.update(self);
            self.level = Some(level);
        }
    }

    /// One render pass. Reads the world only, so rendering twice in a row
    /// paints the same frame.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let screen = self.screen();
        surface.clear();
        surface.fill_rect(0.0, 0.0, screen.width(), screen.height(), self.background);

        let mut visited: FxHashSet<Entity> = FxHashSet::default();
        for &child in &self.children {
            if visited.insert(child) {
                render_object(&self.world, child, surface);
            }
        }
        for &group in &self.groups {
            render_group(&self.world, group, &mut visited, surface);
        }

        if self.is_debug() {
            self.physics.render_debug(&self.world, surface);
        }

        if let Some(level) = &self.level {
            level.render(self, surface);
        }
    }
}
