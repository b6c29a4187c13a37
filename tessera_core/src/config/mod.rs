//! Configuration utilities for the driver and your game.

use std::time::Duration;

use log::LevelFilter;
use semver::Version;

/// This struct represents general configuration of the driver.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    window_size: (u32, u32),
    target_fps: u32,
    frames: Option<u64>,
    log_level: LevelFilter,
}

pub const ENGINE_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const ENGINE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    pub static ref ENGINE_VERSION: Version = Version::parse(ENGINE_VERSION_STR)
        .unwrap_or_else(|_| Version::new(0, 0, 0));
}

impl Config {
    /// Creates new configuration with given name and version.
    ///
    /// Other settings are taken from [`Config::default`].
    ///
    pub fn new(name: String, version: Version) -> Self {
        Self {
            name,
            version,
            ..Self::default()
        }
    }

    /// Sets size of the (virtual) window in pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Sets count of frames per second which the game is simulated with.
    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    /// Sets count of frames to run, or `None` to run until the game asks to exit.
    pub fn with_frames(mut self, frames: Option<u64>) -> Self {
        self.frames = frames;
        self
    }

    /// Sets maximum level of log messages.
    pub fn with_log_level(mut self, log_level: LevelFilter) -> Self {
        self.log_level = log_level;
        self
    }

    /// Name of your game.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semver version of your game.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Size of the (virtual) window in pixels.
    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Fixed duration of one frame, if target frame rate is not zero.
    pub fn frame_time(&self) -> Option<Duration> {
        match self.target_fps {
            0 => None,
            fps => Some(Duration::from_secs_f64(1.0 / fps as f64)),
        }
    }

    pub fn frames(&self) -> Option<u64> {
        self.frames
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "ECS Raylib Example".to_string(),
            version: Version::new(0, 0, 0),
            window_size: (800, 600),
            target_fps: 60,
            frames: Some(60),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
