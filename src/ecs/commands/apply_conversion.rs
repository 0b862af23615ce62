use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{
    ActorRng, Plumage, Silent, SimActor, SpawnReason, Tameable, WorldPosition,
};
use crate::ecs::events::{ACTOR_CURED_LEVEL_EVENT, LevelEvent, SimReactiveEvent};
use crate::ecs::hooks::ActorSnapshot;
use crate::ecs::resources::actor_rng;
use crate::ecs::spawn::{ActorSpawn, finalize_spawn, spawn_actor};
use crate::model::{ActorId, EffectInstance, EffectKind, EventKind};

use super::applicator::ApplyCtx;

/// Ticks of nausea a freshly converted actor suffers.
pub(crate) const CONVERSION_NAUSEA_TICKS: i32 = 200;

/// Replace `entity` with its conversion target.
///
/// The target takes over the actor id, position, taming, sit order,
/// variant, silence and random stream. The source entity is despawned.
pub(crate) fn apply_convert_actor(
    ctx: &mut ApplyCtx,
    world: &mut World,
    entity: Entity,
    initiator: Option<ActorId>,
    description: &str,
) {
    let Some(source) = world.get::<SimActor>(entity).cloned() else {
        tracing::warn!("ConvertActor for missing entity {entity:?}");
        return;
    };
    if !source.is_alive() {
        return;
    }
    let Some(into) = source.kind.conversion_target() else {
        tracing::warn!(actor = %source.id, kind = ?source.kind, "ConvertActor for non-convertible kind");
        return;
    };

    let position = world
        .get::<WorldPosition>(entity)
        .map(|p| p.0)
        .unwrap_or_default();
    let tameable = world.get::<Tameable>(entity).copied().unwrap_or_default();
    let variant = world.get::<Plumage>(entity).map(|p| p.0).unwrap_or_default();
    let silent = world.get::<Silent>(entity).is_some();
    let mut rng = world
        .get::<ActorRng>(entity)
        .map(|r| r.0.clone())
        .unwrap_or_else(|| actor_rng(ctx.config.seed, source.id));

    let source_snapshot = ActorSnapshot {
        entity,
        id: source.id,
        kind: source.kind,
        position,
        tame: tameable.tame,
        owner: tameable.owner,
        ordered_to_sit: tameable.ordered_to_sit,
        variant,
    };

    world.despawn(entity);

    // Finalize rolls a fresh variant; the preserved one wins.
    finalize_spawn(into, SpawnReason::Conversion, &mut rng);
    let target = spawn_actor(
        world,
        source.id,
        ActorSpawn::new(into, position)
            .variant(variant)
            .tameable(tameable)
            .silent(silent)
            .effect(EffectInstance::new(
                EffectKind::Nausea,
                CONVERSION_NAUSEA_TICKS,
                0,
            ))
            .reason(SpawnReason::Conversion)
            .rng(rng),
    );
    ctx.actor_map.remap(source.id, target);

    if !silent {
        ctx.level_events.push(LevelEvent {
            code: ACTOR_CURED_LEVEL_EVENT,
            pos: position.block_pos(),
        });
    }

    let target_snapshot = ActorSnapshot {
        entity: target,
        kind: into,
        ..source_snapshot.clone()
    };
    ctx.hooks.0.on_converted(&source_snapshot, &target_snapshot);

    let event_id = ctx.record_event(
        EventKind::Converted,
        source.id,
        description,
        serde_json::json!({
            "from": source.kind,
            "into": into,
            "initiator": initiator.map(|id| id.0),
        }),
    );
    ctx.emit(SimReactiveEvent::Converted {
        event_id,
        source: entity,
        target,
        actor: source.id,
        into,
        initiator,
    });
    tracing::debug!(actor = %source.id, ?into, ?initiator, "actor converted");
}
