//! Save and load actors as [`ActorRecord`]s.
//!
//! A converting actor is stored with its exact remaining ticks and
//! initiator. Loading re-arms the conversion through the same start path an
//! interaction uses, but with the stored duration instead of a fresh roll.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::components::{
    ActiveEffects, ConversionTimer, Plumage, Silent, SimActor, SpawnReason, Tameable,
    WorldPosition,
};
use crate::ecs::resources::{ActorMap, EcsIdGenerator};
use crate::ecs::spawn::{ActorSpawn, spawn_actor};
use crate::ecs::systems::conversion::begin_conversion;
use crate::model::{ActorRecord, NOT_CONVERTING};

/// Capture the durable state of `entity`. `None` if it is not an actor.
pub fn save_actor(world: &World, entity: Entity) -> Option<ActorRecord> {
    let actor = world.get::<SimActor>(entity)?;
    let tameable = world.get::<Tameable>(entity).copied().unwrap_or_default();

    let (conversion_time, conversion_initiator) = match world.get::<ConversionTimer>(entity) {
        // A stalled timer sits at or below zero; store it as due so it
        // cannot collide with the inactive marker.
        Some(timer) if timer.is_active() => (timer.remaining().max(0), timer.initiator()),
        _ => (NOT_CONVERTING, None),
    };

    Some(ActorRecord {
        id: actor.id,
        kind: actor.kind,
        position: world
            .get::<WorldPosition>(entity)
            .map(|p| p.0)
            .unwrap_or_default(),
        tame: tameable.tame,
        owner: tameable.owner,
        ordered_to_sit: tameable.ordered_to_sit,
        variant: world.get::<Plumage>(entity).map(|p| p.0).unwrap_or_default(),
        silent: world.get::<Silent>(entity).is_some(),
        alive: actor.is_alive(),
        effects: world
            .get::<ActiveEffects>(entity)
            .map(|effects| effects.iter().copied().collect())
            .unwrap_or_default(),
        conversion_time,
        conversion_initiator,
    })
}

/// Put a saved actor back into the world under its stored id.
///
/// Returns `None` if an actor with that id is already present.
pub fn load_actor(world: &mut World, record: &ActorRecord) -> Option<Entity> {
    if world
        .get_resource::<ActorMap>()
        .is_some_and(|map| map.get_bevy(record.id).is_some())
    {
        tracing::warn!(actor = %record.id, "actor already loaded, skipping record");
        return None;
    }

    if let Some(mut id_gen) = world.get_resource_mut::<EcsIdGenerator>() {
        id_gen.0.observe(record.id);
    }

    let mut spawn = ActorSpawn::new(record.kind, record.position)
        .variant(record.variant)
        .tameable(Tameable {
            tame: record.tame,
            owner: record.owner,
            ordered_to_sit: record.ordered_to_sit,
        })
        .silent(record.silent)
        .reason(SpawnReason::Load);
    for effect in &record.effects {
        spawn = spawn.effect(*effect);
    }
    let entity = spawn_actor(world, record.id, spawn);

    if !record.alive {
        let tick = world
            .get_resource::<SimClock>()
            .map_or(0, |clock| clock.tick_count);
        if let Some(mut actor) = world.get_mut::<SimActor>(entity) {
            actor.end = Some(tick);
        }
    } else if record.resumes_conversion() {
        if record.kind.is_convertible() {
            begin_conversion(
                world,
                entity,
                record.conversion_initiator,
                record.conversion_time,
            );
        } else {
            tracing::warn!(
                actor = %record.id,
                kind = ?record.kind,
                "record has a conversion time but its kind cannot convert"
            );
        }
    }

    tracing::debug!(actor = %record.id, kind = ?record.kind, "actor loaded");
    Some(entity)
}

/// Save every actor in the world, ordered by id.
pub fn snapshot_actors(world: &mut World) -> Vec<ActorRecord> {
    let mut query = world.query::<(Entity, &SimActor)>();
    let mut entities: Vec<_> = query
        .iter(world)
        .map(|(entity, actor)| (actor.id, entity))
        .collect();
    entities.sort_by_key(|(id, _)| *id);
    entities
        .into_iter()
        .filter_map(|(_, entity)| save_actor(world, entity))
        .collect()
}

/// Load every record. Returns how many actors were restored.
pub fn restore_actors(world: &mut World, records: &[ActorRecord]) -> usize {
    records
        .iter()
        .filter_map(|record| load_actor(world, record))
        .count()
}
