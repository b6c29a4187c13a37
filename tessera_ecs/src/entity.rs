//! Utilities for *entities* in ECS.

use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::new_key_type;

new_key_type! {
    /// Slot of the entity inside of its world.
    pub(crate) struct EntityKey;
}

/// Unique identifier of the [`World`](crate::World) which created the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct WorldId(u64);

impl WorldId {
    /// Returns identifier never returned before during this program run.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Unique identifier of the *entity* of ECS.
///
/// Identifiers are generational: after the entity was removed from the [`World`](crate::World)
/// its identifier never resolves again, even if the slot is reused by a new entity.
/// Identifier also remembers its world, so it never resolves in any other world.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    world: WorldId,
    key: EntityKey,
}

impl Entity {
    pub(crate) fn new(world: WorldId, key: EntityKey) -> Self {
        Self { world, key }
    }

    pub(crate) fn world(&self) -> WorldId {
        self.world
    }

    pub(crate) fn key(&self) -> EntityKey {
        self.key
    }
}
