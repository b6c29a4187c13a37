//! Headless driver API for games built on top of `tessera_ecs`.

pub use app::init;

pub mod app;
pub mod config;
pub mod error;
pub mod render;
