//! Utilities for attaching several *components* at once.

use super::{Component, ComponentStorage};

/// Set of components which can be attached to an entity in one call.
///
/// Implemented for tuples of up to 8 components.
/// If the tuple contains several components of the same type, the last one wins.
///
pub trait Bundle: Send + Sync + 'static {
    /// Attaches all components of the bundle, replacing components of the same types.
    fn attach(self, components: &mut ComponentStorage);
}

macro_rules! impl_bundle {
    ($($name:ident),+) => {
        #[allow(non_snake_case)]
        impl<$($name),+> Bundle for ($($name,)+)
        where
            $($name: Component,)+
        {
            fn attach(self, components: &mut ComponentStorage) {
                let ($($name,)+) = self;
                $(components.insert($name);)+
            }
        }
    };
}

impl_bundle!(A);
impl_bundle!(A, B);
impl_bundle!(A, B, C);
impl_bundle!(A, B, C, D);
impl_bundle!(A, B, C, D, E);
impl_bundle!(A, B, C, D, E, F);
impl_bundle!(A, B, C, D, E, F, G);
impl_bundle!(A, B, C, D, E, F, G, H);
