//! Entity Component System (ECS) utilities for game engine.
//!
//! Entities are created and owned by the [`World`], each entity owns its components
//! (at most one component of each type), and [queries](Query) or [systems](System)
//! visit the entities which have the required set of components.

pub use bundle::Bundle;
pub use component::{kind_of, Component, ComponentKind, ComponentStorage};
pub use entity::Entity;
pub use error::{EcsError, Result};
pub use query::{for_each_with_components, for_each_with_components_mut, Query};
pub use system::System;
pub use world::World;

mod bundle;
mod component;
mod entity;
mod error;
mod query;
mod system;
mod world;
