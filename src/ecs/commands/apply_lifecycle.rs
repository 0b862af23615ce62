use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::SimActor;
use crate::ecs::events::SimReactiveEvent;
use crate::model::EventKind;

use super::applicator::ApplyCtx;

/// Kill an actor: set `SimActor.end = Some(tick)`.
/// Idempotent: if already dead, no-op (nothing recorded).
pub(crate) fn apply_kill_actor(
    ctx: &mut ApplyCtx,
    world: &mut World,
    entity: Entity,
    description: &str,
) {
    let Some(mut actor) = world.get_mut::<SimActor>(entity) else {
        return;
    };

    if actor.end.is_some() {
        return;
    }

    actor.end = Some(ctx.tick);
    let id = actor.id;

    let event_id = ctx.record_event(EventKind::Died, id, description, serde_json::Value::Null);
    ctx.emit(SimReactiveEvent::ActorDied {
        event_id,
        entity,
        actor: id,
    });
}
