//! Game state driven by the application events.

use tessera_core::app::{ControlFlow, Event};
use tessera_ecs::World;

use crate::components::Lifetime;
use crate::systems::{self, Aging, Movement};

/// World of the demo with its systems.
#[derive(Default)]
pub struct Game {
    world: World,
    movement: Movement,
    aging: Aging,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self {
            world,
            ..Self::default()
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Handles event of the application.
    ///
    /// Asks the application to exit when no entities are left,
    /// or when the last entity with [`Lifetime`] has expired.
    ///
    pub fn handle(&mut self, event: Event<'_>) -> ControlFlow {
        match event {
            Event::Created => {
                log::info!("game created with {} entities", self.world.len());
            }
            Event::Update(delta_time) => {
                self.movement.delta_time = delta_time;
                self.world.run(&mut self.movement);
                self.world.run(&mut self.aging);
                let expired = self.aging.take_expired();
                let any_expired = !expired.is_empty();
                for entity in expired {
                    self.world.remove_entity(entity);
                    log::debug!("entity {:?} expired", entity);
                }
                if self.world.is_empty() {
                    log::info!("no entities left");
                    return ControlFlow::Exit;
                }
                if any_expired && self.world.query::<(Lifetime,)>().next().is_none() {
                    log::info!("all entities with lifetime have expired");
                    return ControlFlow::Exit;
                }
            }
            Event::Render(canvas) => systems::render(&self.world, canvas),
            Event::Destroyed => {
                log::info!("game destroyed with {} entities", self.world.len());
            }
        }
        ControlFlow::Continue
    }
}
