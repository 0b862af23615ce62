use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::events::{LevelEvent, SimReactiveEvent};
use crate::ecs::hooks::ConversionHooks;
use crate::ecs::resources::{ActorMap, EcsIdGenerator, EventLog, SimConfig};
use crate::model::{ActorId, EventKind};

use super::apply_breeding;
use super::apply_conversion;
use super::apply_lifecycle;
use super::{SimCommand, SimCommandKind};

/// Context passed to all `apply_*` sub-functions, providing mutable access
/// to the resources they need without requiring direct World access.
pub(crate) struct ApplyCtx {
    pub event_log: EventLog,
    pub id_gen: EcsIdGenerator,
    pub actor_map: ActorMap,
    pub hooks: ConversionHooks,
    pub config: SimConfig,
    pub tick: u64,
    pub reactive_events: Vec<SimReactiveEvent>,
    pub level_events: Vec<LevelEvent>,
}

impl ApplyCtx {
    /// Record an Event entry in the log and return its id.
    pub(crate) fn record_event(
        &mut self,
        kind: EventKind,
        actor: ActorId,
        description: &str,
        data: serde_json::Value,
    ) -> u64 {
        self.event_log.record(kind, self.tick, actor, description, data)
    }

    /// Queue a reactive event for emission after all commands are processed.
    pub(crate) fn emit(&mut self, event: SimReactiveEvent) {
        self.reactive_events.push(event);
    }
}

/// Exclusive system that drains all pending `SimCommand` messages, applies
/// them, records the audit trail, and emits the resulting messages.
///
/// Runs in `SimPhase::PostUpdate`.
pub fn apply_sim_commands(world: &mut World) {
    let commands: Vec<SimCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<SimCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let tick = world.resource::<SimClock>().tick_count;
    let config = world.resource::<SimConfig>().clone();
    let has_core = world.contains_resource::<EventLog>()
        && world.contains_resource::<EcsIdGenerator>()
        && world.contains_resource::<ActorMap>()
        && world.contains_resource::<ConversionHooks>();
    if !has_core {
        tracing::warn!(
            "apply_sim_commands: core resources missing, dropping {} commands",
            commands.len()
        );
        return;
    }

    // Extract resources into ApplyCtx
    let (Some(event_log), Some(id_gen), Some(actor_map), Some(hooks)) = (
        world.remove_resource::<EventLog>(),
        world.remove_resource::<EcsIdGenerator>(),
        world.remove_resource::<ActorMap>(),
        world.remove_resource::<ConversionHooks>(),
    ) else {
        return;
    };

    let mut ctx = ApplyCtx {
        event_log,
        id_gen,
        actor_map,
        hooks,
        config,
        tick,
        reactive_events: Vec::new(),
        level_events: Vec::new(),
    };

    for cmd in &commands {
        match &cmd.kind {
            SimCommandKind::ConvertActor { entity, initiator } => {
                apply_conversion::apply_convert_actor(
                    &mut ctx,
                    world,
                    *entity,
                    *initiator,
                    &cmd.description,
                );
            }
            SimCommandKind::BreedOffspring { parent, mate } => {
                apply_breeding::apply_breed_offspring(
                    &mut ctx,
                    world,
                    *parent,
                    *mate,
                    &cmd.description,
                );
            }
            SimCommandKind::KillActor { entity } => {
                apply_lifecycle::apply_kill_actor(&mut ctx, world, *entity, &cmd.description);
            }
        }
    }

    let reactive_events = std::mem::take(&mut ctx.reactive_events);
    if let Some(mut messages) = world.get_resource_mut::<Messages<SimReactiveEvent>>() {
        messages.write_batch(reactive_events);
    }
    let level_events = std::mem::take(&mut ctx.level_events);
    if let Some(mut messages) = world.get_resource_mut::<Messages<LevelEvent>>() {
        messages.write_batch(level_events);
    }

    // Put resources back
    world.insert_resource(ctx.event_log);
    world.insert_resource(ctx.id_gen);
    world.insert_resource(ctx.actor_map);
    world.insert_resource(ctx.hooks);
}
