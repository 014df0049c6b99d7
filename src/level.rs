//! The asteroid-dodge level.
//!
//! Two ships sit at the bottom of the canvas, the left one flown with W/S and
//! the right one with the arrow keys. An asteroid field drifts horizontally
//! across the upper part of the canvas. A ship that reaches the top scores a
//! point for its side and goes back to its start; a ship hit by an asteroid
//! just goes back to its start.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::{debug, info};

use crate::components::command::Command;
use crate::components::dynamictext::DynamicText;
use crate::components::fillrect::FillRect;
use crate::components::gameobject::GameObject;
use crate::components::group::Group;
use crate::components::inputcontrolled::{InputControlled, KeyboardController};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::error::{CallbackError, ConfigurationError};
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;
use crate::scene::{Level, Scene};
use crate::surface::{Color, DrawSurface};
use crate::util::random_int_with;

/// Texture key of the ship sprite.
pub const SHIP_TEXTURE: &str = "ship";

const SHIP_SIZE: f32 = 32.0;
const ASTEROID_SIZE: f32 = 5.0;
const SCORE_FONT_SIZE: f32 = 48.0;
const CENTER_LINE_WIDTH: f32 = 10.0;
const CENTER_LINE_HEIGHT: f32 = 150.0;
const ASTEROID_FIELD: &str = "asteroids";

/// Which player a ship or score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn ship_start(self, screen: ScreenSize) -> MapPosition {
        let x = match self {
            Side::Left => screen.width() / 4.0,
            Side::Right => screen.width() - screen.width() / 4.0,
        };
        MapPosition::new(x, screen.height() - SHIP_SIZE)
    }

    fn score_position(self, screen: ScreenSize) -> MapPosition {
        let x = match self {
            Side::Left => screen.width() / 8.0,
            Side::Right => screen.width() - screen.width() / 8.0,
        };
        MapPosition::new(x, screen.height())
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Ship {
    pub side: Side,
    pub start: MapPosition,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Score {
    pub side: Side,
    pub value: u32,
}

/// Drift direction of an asteroid, stored in its [`Command`] tag.
///
/// `LEFT` asteroids enter on the left edge and drift right; `RIGHT` ones enter
/// on the right edge and drift left.
const LEFT: &str = "LEFT";
const RIGHT: &str = "RIGHT";

/// Level tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSettings {
    pub asteroid_count: usize,
    pub ship_velocity: f32,
    pub asteroid_velocity: f32,
    pub seed: Option<u64>,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self::from_config(&GameConfig::default(), None)
    }
}

impl LevelSettings {
    pub fn from_config(config: &GameConfig, seed: Option<u64>) -> Self {
        Self {
            asteroid_count: config.asteroid_count as usize,
            ship_velocity: config.ship_velocity,
            asteroid_velocity: config.asteroid_velocity,
            seed,
        }
    }
}

pub struct MainLevel {
    settings: LevelSettings,
    rng: Rng,
    field: Option<Entity>,
    ships: Vec<Entity>,
}

impl MainLevel {
    pub fn new(settings: LevelSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Self {
            settings,
            rng,
            field: None,
            ships: Vec::new(),
        }
    }

    fn spawn_ship(&mut self, scene: &mut Scene, side: Side) -> Result<Entity, ConfigurationError> {
        let screen = scene.screen();
        let start = side.ship_start(screen);
        let controller = match side {
            Side::Left => KeyboardController::wasd(self.settings.ship_velocity),
            Side::Right => KeyboardController::arrows(self.settings.ship_velocity),
        };
        let ship = scene.spawn((
            GameObject::new(start.x, start.y, SHIP_SIZE, SHIP_SIZE),
            Sprite::new(SHIP_TEXTURE),
            InputControlled::new(controller),
            Ship { side, start },
        ));
        scene.add(ship)?;
        Ok(ship)
    }

    fn spawn_score(&mut self, scene: &mut Scene, side: Side) -> Result<Entity, ConfigurationError> {
        let pos = side.score_position(scene.screen());
        let score = scene.spawn((
            GameObject::new(pos.x, pos.y, 0.0, 0.0),
            DynamicText::new("0", SCORE_FONT_SIZE, Color::WHITE),
            Score { side, value: 0 },
        ));
        scene.add(score)?;
        Ok(score)
    }

    /// Spawn one asteroid. Initial asteroids are scattered over the canvas;
    /// refills enter on the edge they drift away from.
    fn spawn_asteroid(&mut self, scene: &mut Scene, scattered: bool) -> Entity {
        let screen = scene.screen();
        let direction = if random_int_with(&mut self.rng, 0, 1) == 1 {
            LEFT
        } else {
            RIGHT
        };
        let y = random_int_with(&mut self.rng, 0, screen.h - CENTER_LINE_HEIGHT as i32) as f32;
        let x = if scattered {
            random_int_with(&mut self.rng, 0, screen.w) as f32
        } else if direction == LEFT {
            0.0
        } else {
            screen.width() - ASTEROID_SIZE
        };
        let velocity = if direction == LEFT {
            self.settings.asteroid_velocity
        } else {
            -self.settings.asteroid_velocity
        };
        scene.spawn((
            GameObject::new(x, y, ASTEROID_SIZE, ASTEROID_SIZE),
            FillRect::new(Color::WHITE),
            RigidBody::new(velocity, 0.0),
            Command::new(direction),
        ))
    }

    /// Register the asteroid-hits-ship rule for `target` (an asteroid or the
    /// whole field) against every ship.
    fn watch_asteroids(&self, scene: &mut Scene, target: Entity) -> Result<(), ConfigurationError> {
        let Some(field) = self.field else {
            return Ok(());
        };
        for &ship in &self.ships {
            scene.on_collide(ship, target, move |world, ship, asteroid| {
                asteroid_hit_ship(world, field, ship, asteroid)
            })?;
        }
        Ok(())
    }
}

fn reset_ship(world: &mut World, ship: Entity) -> Result<Ship, CallbackError> {
    let info = *world
        .get::<Ship>(ship)
        .ok_or(CallbackError::MissingComponent(ship, "Ship"))?;
    let mut pos = world
        .get_mut::<MapPosition>(ship)
        .ok_or(CallbackError::MissingComponent(ship, "MapPosition"))?;
    *pos = info.start;
    Ok(info)
}

fn asteroid_hit_ship(
    world: &mut World,
    field: Entity,
    ship: Entity,
    asteroid: Entity,
) -> Result<(), CallbackError> {
    if let Some(mut group) = world.get_mut::<Group>(field) {
        group.remove(asteroid);
    }
    world.despawn(asteroid);
    let info = reset_ship(world, ship)?;
    debug!("asteroid {:?} hit {:?} ship", asteroid, info.side);
    Ok(())
}

/// Wall rule for a ship: reaching the top scores a point, any wall crossing
/// resets the ship.
fn ship_hit_wall(world: &mut World, ship: Entity, score: Entity) -> Result<(), CallbackError> {
    let top = world
        .get::<MapPosition>(ship)
        .ok_or(CallbackError::MissingComponent(ship, "MapPosition"))?
        .y;
    if top < 0.0 {
        let mut counter = world
            .get_mut::<Score>(score)
            .ok_or(CallbackError::MissingComponent(score, "Score"))?;
        counter.value += 1;
        let (side, value) = (counter.side, counter.value);
        if let Some(mut text) = world.get_mut::<DynamicText>(score) {
            text.set_content(value.to_string());
        }
        info!("{:?} ship scored, now {}", side, value);
    }
    reset_ship(world, ship)?;
    Ok(())
}

/// Current score of each side, read from the world.
pub fn scores(world: &mut World) -> (u32, u32) {
    let mut left = 0;
    let mut right = 0;
    for score in world.query::<&Score>().iter(world) {
        match score.side {
            Side::Left => left = score.value,
            Side::Right => right = score.value,
        }
    }
    (left, right)
}

impl Level for MainLevel {
    fn create(&mut self, scene: &mut Scene) -> Result<(), ConfigurationError> {
        for side in [Side::Left, Side::Right] {
            let ship = self.spawn_ship(scene, side)?;
            let score = self.spawn_score(scene, side)?;
            scene.on_collide_walls(ship, move |world, ship| ship_hit_wall(world, ship, score))?;
            self.ships.push(ship);
        }

        let field = scene.spawn_group(ASTEROID_FIELD);
        for _ in 0..self.settings.asteroid_count {
            let asteroid = self.spawn_asteroid(scene, true);
            scene.push_to_group(field, asteroid)?;
        }
        scene.add(field)?;
        self.field = Some(field);
        self.watch_asteroids(scene, field)?;

        info!(
            "level created: {} asteroids, seed {:?}",
            self.settings.asteroid_count, self.settings.seed
        );
        Ok(())
    }

    fn update(&mut self, scene: &mut Scene) {
        let Some(field) = self.field else {
            return;
        };
        let width = scene.screen().width();
        let out_of_bounds = |world: &World, asteroid: Entity| {
            world
                .get::<MapPosition>(asteroid)
                .map_or(true, |pos| pos.x > width || pos.x < 0.0)
        };
        if let Ok(removed) = scene.remove_from_group_where(field, out_of_bounds) {
            if !removed.is_empty() {
                debug!("{} asteroids left the field", removed.len());
            }
        }

        let alive = scene.group(field).map_or(0, Group::len);
        if alive < self.settings.asteroid_count {
            let asteroid = self.spawn_asteroid(scene, false);
            let registered = scene
                .push_to_group(field, asteroid)
                .and_then(|_| self.watch_asteroids(scene, asteroid));
            if let Err(e) = registered {
                log::warn!("could not add asteroid {:?}: {}", asteroid, e);
            }
        }
    }

    fn render(&self, scene: &Scene, surface: &mut dyn DrawSurface) {
        let screen = scene.screen();
        surface.fill_rect(
            screen.width() / 2.0,
            screen.height() - CENTER_LINE_HEIGHT,
            CENTER_LINE_WIDTH,
            CENTER_LINE_HEIGHT,
            Color::WHITE,
        );
    }
}
