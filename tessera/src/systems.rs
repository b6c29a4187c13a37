//! Systems of the demo scene.

use tessera_core::app::DeltaTime;
use tessera_core::render::Canvas;
use tessera_ecs::{for_each_with_components, Entity, Query, System, World};

use crate::components::{Lifetime, Position, Sprite, Velocity};

/// Moves every entity with velocity by the time of one frame.
#[derive(Debug, Default)]
pub struct Movement {
    pub delta_time: DeltaTime,
}

impl System for Movement {
    type Query = (Position, Velocity);

    fn handle(
        &mut self,
        _entity: Entity,
        (position, velocity): <Self::Query as Query>::ItemMut<'_>,
    ) {
        position.0 += velocity.0 * self.delta_time.as_secs_f32();
    }
}

/// Counts down lifetimes and collects entities whose lifetime is over.
///
/// Entities cannot be removed while the world is iterated,
/// so removal is left to the caller via [`Aging::take_expired`].
///
#[derive(Debug, Default)]
pub struct Aging {
    expired: Vec<Entity>,
}

impl Aging {
    /// Returns expired entities collected since the last call.
    pub fn take_expired(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.expired)
    }
}

impl System for Aging {
    type Query = (Lifetime,);

    fn handle(&mut self, entity: Entity, (lifetime,): <Self::Query as Query>::ItemMut<'_>) {
        lifetime.frames_left = lifetime.frames_left.saturating_sub(1);
        if lifetime.frames_left == 0 {
            self.expired.push(entity);
        }
    }
}

/// Draws every entity which has both position and sprite as a circle.
pub fn render(world: &World, canvas: &mut dyn Canvas) {
    for_each_with_components::<(Position, Sprite), _>(world, |_, (position, sprite)| {
        canvas.draw_circle(position.0, sprite.radius, sprite.color)
    });
}
