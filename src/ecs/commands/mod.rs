pub mod applicator;
mod apply_breeding;
mod apply_conversion;
mod apply_lifecycle;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::ActorId;

pub use applicator::apply_sim_commands;

/// A command describing an intended structural change to the simulation.
///
/// Systems emit these via `MessageWriter<SimCommand>`. The centralized applicator
/// in `SimPhase::PostUpdate` processes them with exclusive world access: spawns
/// and despawns actors, records the audit trail in `EventLog`, and emits
/// `SimReactiveEvent` messages.
#[derive(Message, Clone, Debug)]
pub struct SimCommand {
    pub kind: SimCommandKind,
    /// Human-readable description for the EventLog.
    pub description: String,
}

impl SimCommand {
    pub fn new(kind: SimCommandKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum SimCommandKind {
    /// Replace a converting actor with its target representation.
    ConvertActor {
        entity: Entity,
        initiator: Option<ActorId>,
    },
    /// Spawn a child of `parent`, optionally with a mate.
    BreedOffspring {
        parent: Entity,
        mate: Option<Entity>,
    },
    KillActor {
        entity: Entity,
    },
}

/// Queue a command from outside the schedule. It is applied during the
/// next tick's `SimPhase::PostUpdate`.
pub fn queue_command(world: &mut bevy_ecs::world::World, command: SimCommand) {
    match world.get_resource_mut::<bevy_ecs::message::Messages<SimCommand>>() {
        Some(mut messages) => {
            messages.write(command);
        }
        None => tracing::warn!("queue_command: SimCommand not registered, dropping {command:?}"),
    }
}
