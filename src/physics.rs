//! Collision rule registry.
//!
//! A [`Physics`] registry belongs to one scene and holds two kinds of rules,
//! both evaluated once per frame by [`Physics::update`]:
//!
//! - **pair rules** (`on_collide`): fire when object B's box lies entirely
//!   inside object A's box and both objects' positions are on the canvas.
//!   The callback receives `(world, a, b)`.
//! - **wall rules** (`on_collide_walls`): fire while object A's box crosses
//!   any canvas edge. The callback receives `(world, a)`.
//!
//! Rules fire every frame their condition holds; there is no debounce.
//!
//! Registering against a [`Group`] expands into one rule per member present
//! at registration time. Members added to the group later are not covered
//! unless registered separately.
//!
//! Callbacks carry their own context (whatever the closure captures) and get
//! the world explicitly, so they can move objects, despawn them or update a
//! score. A callback that returns an error is logged and skipped; the other
//! rules still run that frame. Rules are never unregistered, but a rule whose
//! participant has been despawned can never fire again and is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::error::{CallbackError, ConfigurationError};
use crate::resources::screensize::ScreenSize;
use crate::surface::{Color, DrawSurface};

/// Callback for pair rules: `(world, object_a, object_b)`.
pub type PairCallback = Box<dyn FnMut(&mut World, Entity, Entity) -> Result<(), CallbackError>>;
/// Callback for wall rules: `(world, object_a)`.
pub type WallCallback = Box<dyn FnMut(&mut World, Entity) -> Result<(), CallbackError>>;

// A group registration shares one callback across its expanded rules; the
// callback is freed once the last of those rules is dropped.
struct PairRule {
    object_a: Entity,
    object_b: Entity,
    callback: Rc<RefCell<PairCallback>>,
}

struct WallRule {
    object_a: Entity,
    callback: WallCallback,
}

/// What one [`Physics::update`] pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhysicsReport {
    pub pair_hits: usize,
    pub wall_hits: usize,
    pub failed_callbacks: usize,
    pub dropped_rules: usize,
}

#[derive(Default)]
pub struct Physics {
    pair_rules: Vec<PairRule>,
    wall_rules: Vec<WallRule>,
}

fn body(world: &World, entity: Entity) -> Option<(MapPosition, BoxCollider)> {
    Some((*world.get::<MapPosition>(entity)?, *world.get::<BoxCollider>(entity)?))
}

fn require_body(world: &World, entity: Entity) -> Result<(), ConfigurationError> {
    body(world, entity)
        .map(|_| ())
        .ok_or(ConfigurationError::NotAGameObject(entity))
}

impl Physics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pair rule between `object_a` and `object_b`.
    ///
    /// If `object_b` is a group, one rule is registered per member present
    /// now; members that are not game objects are skipped with a warning.
    /// Returns the number of rules registered.
    pub fn on_collide<F>(
        &mut self,
        world: &World,
        object_a: Entity,
        object_b: Entity,
        callback: F,
    ) -> Result<usize, ConfigurationError>
    where
        F: FnMut(&mut World, Entity, Entity) -> Result<(), CallbackError> + 'static,
    {
        require_body(world, object_a)?;

        let targets: Vec<Entity> = match world.get::<Group>(object_b) {
            Some(group) => group
                .members()
                .iter()
                .copied()
                .filter(|&m| {
                    let ok = body(world, m).is_some();
                    if !ok {
                        warn!("on_collide: group member {:?} is not a game object, skipped", m);
                    }
                    ok
                })
                .collect(),
            None => {
                require_body(world, object_b)?;
                vec![object_b]
            }
        };

        let callback: Rc<RefCell<PairCallback>> = Rc::new(RefCell::new(Box::new(callback)));
        for &target in &targets {
            self.pair_rules.push(PairRule {
                object_a,
                object_b: target,
                callback: Rc::clone(&callback),
            });
        }
        debug!(
            "on_collide: {:?} vs {:?} -> {} rule(s)",
            object_a,
            object_b,
            targets.len()
        );
        Ok(targets.len())
    }

    /// Register a wall rule for `object_a`.
    pub fn on_collide_walls<F>(
        &mut self,
        world: &World,
        object_a: Entity,
        callback: F,
    ) -> Result<(), ConfigurationError>
    where
        F: FnMut(&mut World, Entity) -> Result<(), CallbackError> + 'static,
    {
        require_body(world, object_a)?;
        self.wall_rules.push(WallRule {
            object_a,
            callback: Box::new(callback),
        });
        debug!("on_collide_walls: {:?}", object_a);
        Ok(())
    }

    pub fn pair_rule_count(&self) -> usize {
        self.pair_rules.len()
    }

    pub fn wall_rule_count(&self) -> usize {
        self.wall_rules.len()
    }

    /// Evaluate every rule once against the current world state.
    ///
    /// Pair rules run first, then wall rules, each in registration order.
    /// Callbacks run synchronously and see the effects of earlier callbacks.
    pub fn update(&mut self, world: &mut World) -> PhysicsReport {
        let mut report = PhysicsReport::default();
        let Some(screen) = world.get_resource::<ScreenSize>().copied() else {
            warn!("physics update skipped: no ScreenSize resource");
            return report;
        };

        for rule in &self.pair_rules {
            let (Some((pos_a, box_a)), Some((pos_b, box_b))) =
                (body(world, rule.object_a), body(world, rule.object_b))
            else {
                continue;
            };
            let hit = screen.contains_point(pos_a.x, pos_a.y)
                && screen.contains_point(pos_b.x, pos_b.y)
                && box_a.contains(pos_a, &box_b, pos_b);
            if !hit {
                continue;
            }
            report.pair_hits += 1;
            let result = {
                let mut callback = rule.callback.borrow_mut();
                (&mut **callback)(world, rule.object_a, rule.object_b)
            };
            if let Err(e) = result {
                report.failed_callbacks += 1;
                warn!(
                    "collision callback {:?} vs {:?} failed: {}",
                    rule.object_a, rule.object_b, e
                );
            }
        }

        for rule in &mut self.wall_rules {
            let Some((pos, collider)) = body(world, rule.object_a) else {
                continue;
            };
            if !collider.crosses_bounds(pos, screen) {
                continue;
            }
            report.wall_hits += 1;
            if let Err(e) = (rule.callback)(world, rule.object_a) {
                report.failed_callbacks += 1;
                warn!("wall callback for {:?} failed: {}", rule.object_a, e);
            }
        }

        report.dropped_rules = self.drop_dead_rules(world);
        report
    }

    fn drop_dead_rules(&mut self, world: &World) -> usize {
        let before = self.pair_rules.len() + self.wall_rules.len();
        self.pair_rules
            .retain(|r| body(world, r.object_a).is_some() && body(world, r.object_b).is_some());
        self.wall_rules.retain(|r| body(world, r.object_a).is_some());
        let dropped = before - self.pair_rules.len() - self.wall_rules.len();
        if dropped > 0 {
            debug!("dropped {} rule(s) with despawned participants", dropped);
        }
        dropped
    }

    /// Outline every pair rule's object B box (debug overlay).
    pub fn render_debug(&self, world: &World, surface: &mut dyn DrawSurface) {
        for rule in &self.pair_rules {
            if let Some((pos, collider)) = body(world, rule.object_b) {
                surface.stroke_rect(pos.x, pos.y, collider.width, collider.height, 3.0, Color::GREEN);
            }
        }
    }
}
