//! Utilities for selecting entities by the set of their *components*.

use super::{Component, ComponentKind, ComponentStorage, Entity, World};

/// Set of component types required by the query.
///
/// Implemented for the empty tuple (matches every entity)
/// and for tuples of up to 8 component types.
/// Entity matches the query only if it has *all* of the component types.
///
pub trait Query: 'static {
    /// Immutable references to the components of one entity.
    type Item<'a>;

    /// Mutable references to the components of one entity.
    type ItemMut<'a>;

    /// Kinds of all component types of this query.
    fn kinds() -> Box<[ComponentKind]>;

    /// Retrieves components of this query from the storage of one entity.
    ///
    /// Returns `None` if any of them is missing.
    ///
    fn fetch(components: &ComponentStorage) -> Option<Self::Item<'_>>;

    /// Retrieves mutable components of this query from the storage of one entity.
    ///
    /// Returns `None` if any of them is missing.
    ///
    /// # Panics
    ///
    /// Panics if the query contains the same component type twice.
    ///
    fn fetch_mut(components: &mut ComponentStorage) -> Option<Self::ItemMut<'_>>;
}

impl Query for () {
    type Item<'a> = ();
    type ItemMut<'a> = ();

    fn kinds() -> Box<[ComponentKind]> {
        Box::from([])
    }

    fn fetch(_components: &ComponentStorage) -> Option<Self::Item<'_>> {
        Some(())
    }

    fn fetch_mut(_components: &mut ComponentStorage) -> Option<Self::ItemMut<'_>> {
        Some(())
    }
}

macro_rules! impl_query {
    ($($name:ident),+) => {
        #[allow(non_snake_case)]
        impl<$($name),+> Query for ($($name,)+)
        where
            $($name: Component,)+
        {
            type Item<'a> = ($(&'a $name,)+);
            type ItemMut<'a> = ($(&'a mut $name,)+);

            fn kinds() -> Box<[ComponentKind]> {
                Box::from([$(ComponentKind::of::<$name>(),)+])
            }

            fn fetch(components: &ComponentStorage) -> Option<Self::Item<'_>> {
                Some(($(components.get::<$name>()?,)+))
            }

            fn fetch_mut(components: &mut ComponentStorage) -> Option<Self::ItemMut<'_>> {
                let kinds = [$(ComponentKind::of::<$name>(),)+];
                assert_distinct(&kinds);
                let [$($name,)+] = components.get_disjoint_mut(kinds.each_ref());
                Some(($($name?.downcast_mut::<$name>()?,)+))
            }
        }
    };
}

impl_query!(A);
impl_query!(A, B);
impl_query!(A, B, C);
impl_query!(A, B, C, D);
impl_query!(A, B, C, D, E);
impl_query!(A, B, C, D, E, F);
impl_query!(A, B, C, D, E, F, G);
impl_query!(A, B, C, D, E, F, G, H);

fn assert_distinct(kinds: &[ComponentKind]) {
    for (index, kind) in kinds.iter().enumerate() {
        assert!(
            !kinds[index + 1..].contains(kind),
            "component type {} was requested mutably more than once",
            kind,
        );
    }
}

/// Invokes the callback for every entity of the world which has all component types of `Q`.
///
/// Entities are visited in the order of their creation;
/// entities missing any of the component types are skipped.
///
pub fn for_each_with_components<'w, Q, F>(world: &'w World, mut callback: F)
where
    Q: Query,
    F: FnMut(Entity, Q::Item<'w>),
{
    for (entity, components) in world.query::<Q>() {
        callback(entity, components)
    }
}

/// Invokes the callback with mutable components for every entity of the world
/// which has all component types of `Q`.
///
/// Entities are visited in the order of their creation;
/// entities missing any of the component types are skipped.
///
/// # Panics
///
/// Panics if `Q` contains the same component type twice and some entity is visited.
///
pub fn for_each_with_components_mut<'w, Q, F>(world: &'w mut World, mut callback: F)
where
    Q: Query,
    F: FnMut(Entity, Q::ItemMut<'w>),
{
    for (entity, components) in world.iter_mut() {
        if let Some(components) = Q::fetch_mut(components) {
            callback(entity, components)
        }
    }
}
