//! Utilities for storage of ECS.

use std::collections::BTreeMap;

use slotmap::SlotMap;

use super::entity::{EntityKey, WorldId};
use super::{
    Bundle, Component, ComponentKind, ComponentStorage, EcsError, Entity, Query, Result, System,
};

mod tests;

/// Entity owned by the world.
struct EntityData {
    /// Position of the entity in the order of creation.
    sequence: u64,
    /// All components of the entity.
    components: ComponentStorage,
}

/// Storage for all entities of ECS.
type EntityStorage = SlotMap<EntityKey, EntityData>;

/// Storage for entities and their components.
///
/// The world exclusively owns its entities, and every entity exclusively owns its components.
/// Entities are always enumerated in the order of their creation.
/// Entities of one world are never found in another one.
///
pub struct World {
    id: WorldId,
    /// Storage for all entities.
    entities: EntityStorage,
    /// Live entities ordered by their creation sequence.
    order: BTreeMap<u64, EntityKey>,
    next_sequence: u64,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self {
            id: WorldId::next(),
            entities: SlotMap::with_key(),
            order: BTreeMap::new(),
            next_sequence: 0,
        }
    }

    /// Creates new entity without components.
    pub fn create_entity(&mut self) -> Entity {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let key = self.entities.insert(EntityData {
            sequence,
            components: ComponentStorage::new(),
        });
        self.order.insert(sequence, key);
        let entity = Entity::new(self.id, key);
        log::trace!("created entity {:?}", entity);
        entity
    }

    /// Creates new entity with all components of the bundle attached.
    pub fn spawn_with<B>(&mut self, bundle: B) -> Entity
    where
        B: Bundle,
    {
        let entity = self.create_entity();
        if let Some(components) = self.entity_mut(entity) {
            bundle.attach(components);
        }
        entity
    }

    /// Removes the entity and releases all of its components.
    ///
    /// Returns `false` if the entity was already removed or never belonged to this world,
    /// in which case nothing happens.
    ///
    pub fn remove_entity(&mut self, entity: Entity) -> bool {
        match self.key(entity).and_then(|key| self.entities.remove(key)) {
            Some(data) => {
                self.order.remove(&data.sequence);
                log::trace!(
                    "removed entity {:?} with {} component(s)",
                    entity,
                    data.components.len(),
                );
                true
            }
            None => {
                log::trace!("entity {:?} is not alive, nothing to remove", entity);
                false
            }
        }
    }

    /// Returns `true` if the entity is alive in this world.
    pub fn contains(&self, entity: Entity) -> bool {
        self.key(entity)
            .map_or(false, |key| self.entities.contains_key(key))
    }

    /// Count of live entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Removes all entities with their components.
    ///
    /// Handles of removed entities never resolve again.
    ///
    pub fn clear(&mut self) {
        log::trace!("clearing world of {} entities", self.len());
        self.entities.clear();
        self.order.clear();
    }

    /// Returns snapshot of all live entities in the order of their creation.
    ///
    /// Snapshot is not updated when entities are created or removed later.
    ///
    pub fn entities(&self) -> Vec<Entity> {
        self.order
            .values()
            .map(|&key| Entity::new(self.id, key))
            .collect()
    }

    /// Returns immutable iterator over all live entities with their components,
    /// in the order of their creation.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &ComponentStorage)> {
        self.order.values().filter_map(move |&key| {
            let data = self.entities.get(key)?;
            Some((Entity::new(self.id, key), &data.components))
        })
    }

    /// Returns mutable iterator over all live entities with their components,
    /// in the order of their creation.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut ComponentStorage)> {
        let world = self.id;
        let mut entities: Vec<_> = self
            .entities
            .iter_mut()
            .map(|(key, data)| (data.sequence, Entity::new(world, key), &mut data.components))
            .collect();
        entities.sort_unstable_by_key(|(sequence, _, _)| *sequence);
        entities
            .into_iter()
            .map(|(_, entity, components)| (entity, components))
    }

    /// Returns iterator over entities which have all component types of `Q`,
    /// in the order of their creation.
    pub fn query<Q>(&self) -> impl Iterator<Item = (Entity, Q::Item<'_>)>
    where
        Q: Query,
    {
        self.iter()
            .filter_map(|(entity, components)| Some((entity, Q::fetch(components)?)))
    }

    /// Executes the system for every entity which has all component types of its query.
    pub fn run<S>(&mut self, system: &mut S)
    where
        S: System,
    {
        log::trace!("running system {}", system.name());
        for (entity, components) in self.iter_mut() {
            if let Some(components) = <S::Query as Query>::fetch_mut(components) {
                system.handle(entity, components);
            }
        }
    }

    /// Retrieves components of the entity, if it is alive.
    pub fn entity(&self, entity: Entity) -> Option<&ComponentStorage> {
        let key = self.key(entity)?;
        self.entities.get(key).map(|data| &data.components)
    }

    /// Retrieves mutable components of the entity, if it is alive.
    pub fn entity_mut(&mut self, entity: Entity) -> Option<&mut ComponentStorage> {
        let key = self.key(entity)?;
        self.entities.get_mut(key).map(|data| &mut data.components)
    }

    /// Slot of the entity, if it was created by this world.
    fn key(&self, entity: Entity) -> Option<EntityKey> {
        (entity.world() == self.id).then(|| entity.key())
    }

    /// Attaches component to the entity.
    /// If component of this type was already attached, it will be replaced by value.
    ///
    /// Returns previously attached component, if any.
    ///
    /// # Panics
    ///
    /// Panics if the entity is not alive in this world, which includes entities of other worlds.
    /// Use [`try_add_component`](World::try_add_component) to handle this case.
    ///
    pub fn add_component<T>(&mut self, entity: Entity, component: T) -> Option<T>
    where
        T: Component,
    {
        match self.try_add_component(entity, component) {
            Ok(prev) => prev,
            Err(error) => panic!("cannot add component: {}", error),
        }
    }

    /// Attaches component to the entity, or returns an error if the entity is not alive.
    pub fn try_add_component<T>(&mut self, entity: Entity, component: T) -> Result<Option<T>>
    where
        T: Component,
    {
        let components = self
            .entity_mut(entity)
            .ok_or(EcsError::NoSuchEntity(entity))?;
        let prev = components.insert(component);
        if prev.is_some() {
            log::trace!(
                "replaced component {} of entity {:?}",
                ComponentKind::of::<T>(),
                entity,
            );
        }
        Ok(prev)
    }

    /// Detaches component of type `T` from the entity.
    ///
    /// Returns previously attached component, if any.
    ///
    /// # Panics
    ///
    /// Panics if the entity is not alive in this world, which includes entities of other worlds.
    /// Use [`try_remove_component`](World::try_remove_component) to handle this case.
    ///
    pub fn remove_component<T>(&mut self, entity: Entity) -> Option<T>
    where
        T: Component,
    {
        match self.try_remove_component(entity) {
            Ok(prev) => prev,
            Err(error) => panic!("cannot remove component: {}", error),
        }
    }

    /// Detaches component of type `T` from the entity,
    /// or returns an error if the entity is not alive.
    pub fn try_remove_component<T>(&mut self, entity: Entity) -> Result<Option<T>>
    where
        T: Component,
    {
        let components = self
            .entity_mut(entity)
            .ok_or(EcsError::NoSuchEntity(entity))?;
        Ok(components.remove())
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    ///
    /// Returns `None` if the component is missing or the entity is not alive.
    ///
    pub fn get_component<T>(&self, entity: Entity) -> Option<&T>
    where
        T: Component,
    {
        self.entity(entity)?.get()
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    ///
    /// Returns `None` if the component is missing or the entity is not alive.
    ///
    pub fn get_component_mut<T>(&mut self, entity: Entity) -> Option<&mut T>
    where
        T: Component,
    {
        self.entity_mut(entity)?.get_mut()
    }

    /// Returns `true` if the entity is alive and has component of type `T`.
    pub fn has_component<T>(&self, entity: Entity) -> bool
    where
        T: Component,
    {
        self.entity(entity)
            .map(|components| components.attached::<T>())
            .unwrap_or(false)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
