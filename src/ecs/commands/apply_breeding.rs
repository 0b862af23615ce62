use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{
    ActorRng, Plumage, SimActor, SpawnReason, Tameable, WorldPosition,
};
use crate::ecs::events::SimReactiveEvent;
use crate::ecs::resources::actor_rng;
use crate::ecs::spawn::{ActorSpawn, finalize_spawn, spawn_actor};
use crate::ecs::systems::breeding::{inherit_variant, offspring_tameness};
use crate::model::EventKind;

use super::applicator::ApplyCtx;

/// Spawn one offspring of `parent` at the parent's position.
pub(crate) fn apply_breed_offspring(
    ctx: &mut ApplyCtx,
    world: &mut World,
    parent: Entity,
    mate: Option<Entity>,
    description: &str,
) {
    let Some(parent_actor) = world.get::<SimActor>(parent).cloned() else {
        tracing::warn!("BreedOffspring for missing entity {parent:?}");
        return;
    };
    if !parent_actor.is_alive() || !parent_actor.kind.can_breed() {
        return;
    }

    let position = world
        .get::<WorldPosition>(parent)
        .map(|p| p.0)
        .unwrap_or_default();
    let parent_variant = world.get::<Plumage>(parent).map(|p| p.0).unwrap_or_default();
    let parent_tame = world.get::<Tameable>(parent).copied().unwrap_or_default();
    let mate_tame = mate.and_then(|m| world.get::<Tameable>(m).copied());
    let tameable = offspring_tameness(&parent_tame, mate_tame.as_ref());

    let id = ctx.id_gen.0.next_id();
    let mut offspring_rng = actor_rng(ctx.config.seed, id);
    let own = finalize_spawn(parent_actor.kind, SpawnReason::Breeding, &mut offspring_rng);

    let variant = match world.get_mut::<ActorRng>(parent) {
        Some(mut rng) => inherit_variant(&mut rng.0, parent_variant, own),
        None => own,
    };

    let offspring = spawn_actor(
        world,
        id,
        ActorSpawn::new(parent_actor.kind, position)
            .variant(variant)
            .tameable(tameable)
            .reason(SpawnReason::Breeding)
            .rng(offspring_rng),
    );
    ctx.actor_map.insert(id, offspring);

    let event_id = ctx.record_event(
        EventKind::OffspringBorn,
        parent_actor.id,
        description,
        serde_json::json!({ "offspring": id.0, "variant": variant }),
    );
    ctx.emit(SimReactiveEvent::OffspringBorn {
        event_id,
        parent,
        offspring,
    });
    tracing::debug!(parent = %parent_actor.id, offspring = %id, ?variant, "offspring born");
}
