//! Errors of ECS operations.

use thiserror::Error;

use super::Entity;

/// Result of ECS operation which requires a live entity.
pub type Result<T> = std::result::Result<T, EcsError>;

/// Error of ECS operation which cannot be applied to the given entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EcsError {
    /// Entity was removed, or was created by another world.
    #[error("entity {0:?} is not alive in this world")]
    NoSuchEntity(Entity),
}
