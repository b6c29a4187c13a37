//! Initial content of the demo world.

use tessera_core::render::colors;
use tessera_ecs::{Entity, World};

use crate::components::{Lifetime, Position, Sprite, Velocity};

/// Entities of the demo scene.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub red: Entity,
    pub blue: Entity,
}

/// Creates two static circles: a red one at (100, 100) and a blue one at (200, 200).
pub fn populate(world: &mut World) -> Scene {
    let red = world.create_entity();
    world.add_component(red, Position::new(100.0, 100.0));
    world.add_component(red, Sprite::new(colors::RED));

    let blue = world.create_entity();
    world.add_component(blue, Position::new(200.0, 200.0));
    world.add_component(blue, Sprite::new(colors::BLUE));

    log::debug!("populated scene with {} entities", world.len());
    Scene { red, blue }
}

/// Creates small green circle which flies to the right and disappears after given frames.
pub fn spawn_comet(world: &mut World, frames: u32) -> Entity {
    world.spawn_with((
        Position::new(400.0, 300.0),
        Velocity::new(120.0, -60.0),
        Sprite::new(colors::GREEN).with_radius(6.0),
        Lifetime {
            frames_left: frames,
        },
    ))
}
