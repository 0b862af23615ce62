use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::{ActorId, ActorKind, BlockPos, Position};

/// Entity event code broadcast when an actor starts curing.
pub const CURE_STARTED_EVENT: u8 = 16;

/// World event code played where an actor finished curing.
pub const ACTOR_CURED_LEVEL_EVENT: u32 = 1027;

/// Reactive events emitted by the command applicator for cross-system reactions.
#[derive(Message, Clone, Debug)]
pub enum SimReactiveEvent {
    Converted {
        event_id: u64,
        source: Entity,
        target: Entity,
        actor: ActorId,
        into: ActorKind,
        initiator: Option<ActorId>,
    },
    OffspringBorn {
        event_id: u64,
        parent: Entity,
        offspring: Entity,
    },
    ActorDied {
        event_id: u64,
        entity: Entity,
        actor: ActorId,
    },
}

/// Cosmetic per-entity event forwarded to observers.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct EntityEvent {
    pub actor: ActorId,
    pub code: u8,
    pub eye_position: Position,
    pub silent: bool,
}

/// Cosmetic world event at a block position.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct LevelEvent {
    pub code: u32,
    pub pos: BlockPos,
}
