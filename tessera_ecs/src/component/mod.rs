//! Utilities for *components* in ECS.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

pub use storage::*;

mod storage;

/// Objects of this trait represent *component* of ECS.
///
/// Components should be just plain data. Any thread-safe `'static` type is a component,
/// so new component types need no registration.
///
pub trait Component: Any + Send + Sync {}

impl<T> Component for T where T: Any + Send + Sync {}

/// Runtime identity of the *component* type.
///
/// Two kinds are equal if and only if they were created from the same type.
/// Type name is kept for diagnostics only and does not take part in comparison.
///
#[derive(Clone, Copy)]
pub struct ComponentKind {
    id: TypeId,
    name: &'static str,
}

impl ComponentKind {
    /// Returns kind of the component type `T`.
    pub fn of<T>() -> Self
    where
        T: Component,
    {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Unique identifier of the component type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Name of the component type.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Returns kind of the component type `T`.
///
/// Same as [`ComponentKind::of`].
///
pub fn kind_of<T>() -> ComponentKind
where
    T: Component,
{
    ComponentKind::of::<T>()
}

impl PartialEq for ComponentKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentKind {}

impl Hash for ComponentKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Debug for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ComponentKind").field(&self.name).finish()
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}
