//! Utilities for *systems* in ECS.

use std::any::type_name;

use super::{Entity, Query};

/// Objects of this trait represent *system* of ECS.
///
/// Systems are executed by [`World::run`](crate::World::run), which calls
/// [`handle`](System::handle) once for every entity having all component types of the query,
/// in the order of entity creation.
///
pub trait System {
    /// Component types which will be handled by this system.
    type Query: Query;

    /// Handles components of one entity.
    fn handle(&mut self, entity: Entity, components: <Self::Query as Query>::ItemMut<'_>);

    /// Name of the system used in diagnostics.
    fn name(&self) -> &str {
        type_name::<Self>()
    }
}
