//! Storage of type-erased **components** attached to one entity.

use std::any::Any;
use std::collections::HashMap;

use super::{Component, ComponentKind};

/// Owned component with erased type.
pub(crate) type BoxedComponent = Box<dyn Any + Send + Sync>;

/// Storage for components of one entity.
///
/// Holds at most one component of each [kind](ComponentKind).
///
#[derive(Default)]
pub struct ComponentStorage {
    components: HashMap<ComponentKind, BoxedComponent>,
}

impl ComponentStorage {
    /// Creates an empty component storage.
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Inserts component of type `T`.
    /// If component of this type was already attached, it will be replaced by value.
    ///
    /// Returns previously attached component, if any.
    ///
    pub fn insert<T>(&mut self, component: T) -> Option<T>
    where
        T: Component,
    {
        let prev = self
            .components
            .insert(ComponentKind::of::<T>(), Box::new(component))?;
        Some(unbox(prev))
    }

    /// Removes component of type `T`.
    ///
    /// Returns component that was previously attached, if any.
    ///
    pub fn remove<T>(&mut self) -> Option<T>
    where
        T: Component,
    {
        let prev = self.components.remove(&ComponentKind::of::<T>())?;
        Some(unbox(prev))
    }

    /// Removes component of the given kind without knowing its type.
    ///
    /// Returns `true` if the component was attached.
    ///
    pub fn remove_kind(&mut self, kind: ComponentKind) -> bool {
        self.components.remove(&kind).is_some()
    }

    /// Returns `true` if component of type `T` is attached.
    pub fn attached<T>(&self) -> bool
    where
        T: Component,
    {
        self.contains_kind(ComponentKind::of::<T>())
    }

    /// Returns `true` if component of the given kind is attached.
    pub fn contains_kind(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    /// Retrieves an immutable reference to component of type `T`.
    pub fn get<T>(&self) -> Option<&T>
    where
        T: Component,
    {
        let boxed = self.components.get(&ComponentKind::of::<T>())?;
        boxed.downcast_ref::<T>()
    }

    /// Retrieves a mutable reference to component of type `T`.
    pub fn get_mut<T>(&mut self) -> Option<&mut T>
    where
        T: Component,
    {
        let boxed = self.components.get_mut(&ComponentKind::of::<T>())?;
        boxed.downcast_mut::<T>()
    }

    /// Returns iterator over kinds of all attached components, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.keys().copied()
    }

    /// Count of attached components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Removes all attached components.
    pub fn clear(&mut self) {
        self.components.clear()
    }

    /// Retrieves mutable references to components of several distinct kinds at once.
    ///
    /// # Panics
    ///
    /// Panics if any two kinds are equal.
    ///
    pub(crate) fn get_disjoint_mut<const N: usize>(
        &mut self,
        kinds: [&ComponentKind; N],
    ) -> [Option<&mut BoxedComponent>; N] {
        self.components.get_disjoint_mut(kinds)
    }
}

fn unbox<T>(boxed: BoxedComponent) -> T
where
    T: Component,
{
    *boxed
        .downcast::<T>()
        .expect("component was stored under the kind of another type")
}
