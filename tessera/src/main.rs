//! Headless demo of the tessera ECS
//!
//! Creates a red and a blue circle plus a short-lived comet,
//! then runs the frame loop and logs every draw command.

use std::error::Error;

use tessera_ecs::World;

use canvas::LogCanvas;
use game::Game;

mod canvas;
mod components;
mod game;
mod logger;
mod scene;
mod settings;
mod systems;

/// Frames the comet of the demo scene stays alive.
const COMET_LIFETIME: u32 = 90;

/// Entry point of `tessera` demo
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let config = settings::from_env()?;
    let _handle = logger::init(config.log_level())?;
    log::info!("logger initialized successfully");

    let mut world = World::new();
    let scene = scene::populate(&mut world);
    let comet = scene::spawn_comet(&mut world, COMET_LIFETIME);
    log::debug!(
        "red {:?}, blue {:?}, comet {:?}",
        scene.red,
        scene.blue,
        comet,
    );
    let mut game = Game::new(world);

    let mut application = tessera_core::init(config, LogCanvas::default())?;
    let stats = application.run(|event| game.handle(event));
    log::info!(
        "finished after {} frame(s), {} draw command(s), {} entities left",
        stats.frames,
        application.canvas().commands(),
        game.world().len(),
    );
    Ok(())
}
