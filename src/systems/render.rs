//! Per-object rendering.
//!
//! An object is drawn from whichever visual components it carries, in a
//! fixed order: [`FillRect`], then [`Sprite`], then [`DynamicText`]. An object
//! with none of them draws nothing (the base render is a no-op). Drawing
//! never mutates the world, so rendering twice paints the same frame.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::fillrect::FillRect;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::surface::DrawSurface;

/// Draw one object. Returns `false` when the entity is not a live game object.
pub fn render_object(world: &World, entity: Entity, surface: &mut dyn DrawSurface) -> bool {
    let (Some(position), Some(collider)) = (
        world.get::<MapPosition>(entity),
        world.get::<BoxCollider>(entity),
    ) else {
        return false;
    };

    if let Some(fill) = world.get::<FillRect>(entity) {
        surface.fill_rect(
            position.x,
            position.y,
            collider.width,
            collider.height,
            fill.color,
        );
    }
    if let Some(sprite) = world.get::<Sprite>(entity) {
        surface.draw_image(
            &sprite.tex_key,
            position.x,
            position.y,
            collider.width,
            collider.height,
        );
    }
    if let Some(text) = world.get::<DynamicText>(entity) {
        surface.fill_text(
            &text.content,
            position.x,
            position.y,
            text.font_size,
            text.color,
        );
    }
    true
}

/// Draw every live member of `group` not yet in `visited`, in insertion order.
pub fn render_group(
    world: &World,
    group: Entity,
    visited: &mut FxHashSet<Entity>,
    surface: &mut dyn DrawSurface,
) -> usize {
    let Some(group) = world.get::<Group>(group) else {
        return 0;
    };
    let mut rendered = 0;
    for &member in group.members() {
        if visited.insert(member) && render_object(world, member, surface) {
            rendered += 1;
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::gameobject::GameObject;
    use crate::surface::{Color, DrawCommand, RecordingSurface};

    #[test]
    fn test_plain_object_draws_nothing() {
        let mut world = World::new();
        let e = world.spawn(GameObject::new(1.0, 2.0, 3.0, 4.0)).id();
        let mut s = RecordingSurface::new();
        assert!(render_object(&world, e, &mut s));
        assert!(s.commands().is_empty());
    }

    #[test]
    fn test_draw_order_fill_sprite_text() {
        let mut world = World::new();
        let e = world
            .spawn((
                GameObject::new(1.0, 2.0, 3.0, 4.0),
                DynamicText::new("7", 48.0, Color::WHITE),
                Sprite::new("ship"),
                FillRect::new(Color::GREEN),
            ))
            .id();
        let mut s = RecordingSurface::new();
        render_object(&world, e, &mut s);
        assert_eq!(
            s.commands(),
            &[
                DrawCommand::FillRect {
                    x: 1.0,
                    y: 2.0,
                    width: 3.0,
                    height: 4.0,
                    color: Color::GREEN
                },
                DrawCommand::DrawImage {
                    key: "ship".to_string(),
                    x: 1.0,
                    y: 2.0,
                    width: 3.0,
                    height: 4.0
                },
                DrawCommand::FillText {
                    text: "7".to_string(),
                    x: 1.0,
                    y: 2.0,
                    font_size: 48.0,
                    color: Color::WHITE
                },
            ]
        );
    }

    #[test]
    fn test_render_group_in_insertion_order() {
        let mut world = World::new();
        let a = world
            .spawn((GameObject::new(1.0, 0.0, 1.0, 1.0), FillRect::new(Color::WHITE)))
            .id();
        let b = world
            .spawn((GameObject::new(2.0, 0.0, 1.0, 1.0), FillRect::new(Color::WHITE)))
            .id();
        let mut group = Group::new("g");
        group.push(b);
        group.push(a);
        let g = world.spawn(group).id();

        let mut s = RecordingSurface::new();
        let mut visited = FxHashSet::default();
        assert_eq!(render_group(&world, g, &mut visited, &mut s), 2);
        let xs: Vec<f32> = s
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![2.0, 1.0]);
    }
}
