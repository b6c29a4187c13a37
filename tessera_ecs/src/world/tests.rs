#![cfg(test)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::for_each_with_components;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Color {
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sprite {
    color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Velocity {
    x: f32,
    y: f32,
}

/// Counts how many instances are alive.
struct Tracked(Arc<AtomicUsize>);

impl Tracked {
    fn new(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

fn render(world: &World) -> Vec<(f32, f32, Color)> {
    let mut calls = Vec::new();
    for_each_with_components::<(Position, Sprite), _>(world, |_, (position, sprite)| {
        calls.push((position.x, position.y, sprite.color))
    });
    calls
}

#[test]
fn test_scenario() {
    let mut world = World::new();

    let entity1 = world.create_entity();
    world.add_component(entity1, Position { x: 100.0, y: 100.0 });
    world.add_component(entity1, Sprite { color: Color::Red });

    let entity2 = world.create_entity();
    world.add_component(entity2, Position { x: 200.0, y: 200.0 });
    world.add_component(entity2, Sprite { color: Color::Blue });

    assert_eq!(
        render(&world),
        [(100.0, 100.0, Color::Red), (200.0, 200.0, Color::Blue)],
    );

    assert!(world.remove_entity(entity1));
    assert_eq!(render(&world), [(200.0, 200.0, Color::Blue)]);
}

#[test]
fn test_latest_component_wins() {
    let mut world = World::new();
    let entity = world.create_entity();

    for i in 0..5 {
        world.add_component(entity, Position { x: i as f32, y: 0.0 });
    }
    assert_eq!(
        world.add_component(entity, Position { x: 10.0, y: 0.0 }),
        Some(Position { x: 4.0, y: 0.0 }),
    );
    assert_eq!(
        world.get_component::<Position>(entity),
        Some(&Position { x: 10.0, y: 0.0 }),
    );
}

#[test]
fn test_replaced_component_is_released() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut world = World::new();
    let entity = world.create_entity();

    world.add_component(entity, Tracked::new(&counter));
    world.add_component(entity, Tracked::new(&counter));
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    world.remove_component::<Tracked>(entity);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_remove_component_is_idempotent() {
    let mut world = World::new();
    let entity = world.create_entity();
    world.add_component(entity, Sprite { color: Color::Red });

    assert_eq!(
        world.remove_component::<Sprite>(entity),
        Some(Sprite { color: Color::Red }),
    );
    assert!(!world.has_component::<Sprite>(entity));
    assert_eq!(world.remove_component::<Sprite>(entity), None);
    assert!(!world.has_component::<Sprite>(entity));
}

#[test]
fn test_isolation() {
    let mut world = World::new();
    let entity1 = world.create_entity();
    let entity2 = world.create_entity();
    world.add_component(entity1, Position { x: 1.0, y: 1.0 });
    world.add_component(entity2, Position { x: 2.0, y: 2.0 });

    world.add_component(entity1, Position { x: 3.0, y: 3.0 });
    world.add_component(entity1, Sprite { color: Color::Blue });
    assert_eq!(
        world.get_component::<Position>(entity2),
        Some(&Position { x: 2.0, y: 2.0 }),
    );
    assert!(!world.has_component::<Sprite>(entity2));

    world.remove_component::<Position>(entity1);
    assert!(world.has_component::<Position>(entity2));
}

#[test]
fn test_lifecycle() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut world = World::new();

    let entity = world.spawn_with((Position { x: 0.0, y: 0.0 }, Tracked::new(&counter)));
    assert_eq!(world.entity(entity).map(ComponentStorage::len), Some(2));
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    assert!(world.remove_entity(entity));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert!(!world.contains(entity));
    assert!(!world.entities().contains(&entity));

    let fresh = world.create_entity();
    assert_ne!(fresh, entity);
    assert_eq!(world.entity(fresh).map(ComponentStorage::len), Some(0));
    assert!(world.entity(entity).is_none());
    assert_eq!(world.get_component::<Position>(entity), None);
}

#[test]
fn test_remove_entity_is_idempotent() {
    let mut world = World::new();
    let entity = world.create_entity();
    let other = world.create_entity();

    assert!(world.remove_entity(entity));
    assert!(!world.remove_entity(entity));
    assert_eq!(world.entities(), [other]);
    assert_eq!(world.len(), 1);
}

#[test]
fn test_foreign_handle() {
    let mut world = World::new();
    let mine = world.create_entity();
    world.add_component(mine, Sprite { color: Color::Blue });

    // Both entities occupy the first slot of their worlds.
    let mut another = World::new();
    let foreign = another.create_entity();
    another.add_component(foreign, Sprite { color: Color::Red });

    assert_ne!(foreign, mine);
    assert!(!world.contains(foreign));
    assert!(world.entity(foreign).is_none());
    assert_eq!(world.get_component::<Sprite>(foreign), None);
    assert!(world.get_component_mut::<Sprite>(foreign).is_none());
    assert!(!world.has_component::<Sprite>(foreign));
    assert_eq!(
        world.try_add_component(foreign, Sprite { color: Color::Red }),
        Err(EcsError::NoSuchEntity(foreign)),
    );
    assert_eq!(
        world.try_remove_component::<Sprite>(foreign),
        Err(EcsError::NoSuchEntity(foreign)),
    );

    assert!(!world.remove_entity(foreign));
    assert!(world.contains(mine));
    assert_eq!(
        world.get_component::<Sprite>(mine),
        Some(&Sprite { color: Color::Blue }),
    );
    assert_eq!(
        another.get_component::<Sprite>(foreign),
        Some(&Sprite { color: Color::Red }),
    );
    assert!(another.remove_entity(foreign));
}

#[test]
#[should_panic]
fn test_foreign_handle_assert() {
    let mut world = World::new();
    world.create_entity();
    let foreign = World::new().create_entity();
    world.add_component(foreign, Sprite { color: Color::Red });
}

#[test]
fn test_insertion_order() {
    let mut world = World::new();
    let entities: Vec<_> = (0..10).map(|_| world.create_entity()).collect();
    assert_eq!(world.entities(), entities);

    world.remove_entity(entities[2]);
    world.remove_entity(entities[7]);
    // Freed slots are reused, but new entities still go last.
    let late1 = world.create_entity();
    let late2 = world.create_entity();

    let mut expected: Vec<_> = entities
        .iter()
        .copied()
        .filter(|&entity| entity != entities[2] && entity != entities[7])
        .collect();
    expected.push(late1);
    expected.push(late2);
    assert_eq!(world.entities(), expected);

    let iterated: Vec<_> = world.iter().map(|(entity, _)| entity).collect();
    assert_eq!(iterated, expected);
    let iterated: Vec<_> = world.iter_mut().map(|(entity, _)| entity).collect();
    assert_eq!(iterated, expected);
}

#[test]
fn test_snapshot_is_not_live() {
    let mut world = World::new();
    let entity1 = world.create_entity();
    let entity2 = world.create_entity();

    let snapshot = world.entities();
    for &entity in &snapshot {
        world.remove_entity(entity);
        world.create_entity();
    }
    assert_eq!(snapshot, [entity1, entity2]);
    assert_eq!(world.len(), 2);
    assert!(snapshot.iter().all(|&entity| !world.contains(entity)));
}

#[test]
fn test_repeatable_queries() {
    fn build() -> World {
        let mut world = World::new();
        for i in 0..50 {
            let entity = world.create_entity();
            world.add_component(entity, Position { x: i as f32, y: 0.0 });
            if i % 3 != 0 {
                world.add_component(entity, Sprite { color: Color::Red });
            }
            if i % 5 == 0 {
                world.remove_entity(entity);
            }
        }
        world
    }

    let first = render(&build());
    let second = render(&build());
    assert!(!first.is_empty());
    assert_eq!(first, second);

    let world = build();
    assert_eq!(render(&world), render(&world));
}

#[test]
fn test_query_matches_lookup() {
    let mut world = World::new();
    for i in 0..20 {
        let entity = world.create_entity();
        if i % 2 == 0 {
            world.add_component(entity, Position { x: 0.0, y: 0.0 });
        }
        if i % 3 == 0 {
            world.add_component(entity, Sprite { color: Color::Blue });
        }
    }

    let visited: Vec<_> = world
        .query::<(Position, Sprite)>()
        .map(|(entity, _)| entity)
        .collect();
    let expected: Vec<_> = world
        .entities()
        .into_iter()
        .filter(|&entity| {
            world.has_component::<Position>(entity) && world.has_component::<Sprite>(entity)
        })
        .collect();
    assert_eq!(visited, expected);
    assert_eq!(visited.len(), 4);
}

#[test]
fn test_stale_handle() {
    let mut world = World::new();
    let entity = world.create_entity();
    world.remove_entity(entity);

    assert_eq!(
        world.try_add_component(entity, Sprite { color: Color::Red }),
        Err(EcsError::NoSuchEntity(entity)),
    );
    assert_eq!(
        world.try_remove_component::<Sprite>(entity),
        Err(EcsError::NoSuchEntity(entity)),
    );
    assert!(world.get_component_mut::<Sprite>(entity).is_none());
    assert!(!world.has_component::<Sprite>(entity));
}

#[test]
#[should_panic]
fn test_stale_handle_assert() {
    let mut world = World::new();
    let entity = world.create_entity();
    world.remove_entity(entity);
    world.add_component(entity, Sprite { color: Color::Red });
}

#[test]
fn test_clear() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut world = World::new();
    let entity = world.spawn_with((Tracked::new(&counter),));
    world.spawn_with((Tracked::new(&counter), Velocity { x: 1.0, y: 0.0 }));

    world.clear();
    assert!(world.is_empty());
    assert!(world.entities().is_empty());
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert!(!world.remove_entity(entity));
}

#[test]
fn test_system() {
    #[derive(Default)]
    struct Movement {
        moved: usize,
    }

    impl System for Movement {
        type Query = (Position, Velocity);

        fn handle(
            &mut self,
            _entity: Entity,
            (position, velocity): <Self::Query as Query>::ItemMut<'_>,
        ) {
            position.x += velocity.x;
            position.y += velocity.y;
            self.moved += 1;
        }
    }

    let mut world = World::new();
    let moving = world.spawn_with((Position { x: 0.0, y: 0.0 }, Velocity { x: 1.0, y: 2.0 }));
    let still = world.spawn_with((Position { x: 5.0, y: 5.0 },));

    let mut movement = Movement::default();
    world.run(&mut movement);
    world.run(&mut movement);

    assert_eq!(movement.moved, 2);
    assert!(movement.name().ends_with("Movement"));
    assert_eq!(
        world.get_component::<Position>(moving),
        Some(&Position { x: 2.0, y: 4.0 }),
    );
    assert_eq!(
        world.get_component::<Position>(still),
        Some(&Position { x: 5.0, y: 5.0 }),
    );
    assert_eq!(<<Movement as System>::Query as Query>::kinds().len(), 2);
}
