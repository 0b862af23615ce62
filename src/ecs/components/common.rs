use bevy_ecs::component::Component;
use rand::rngs::SmallRng;

use crate::model::{ActorId, ActorKind, Position, Variant};

/// Core identity component present on every actor entity.
#[derive(Component, Debug, Clone)]
pub struct SimActor {
    pub id: ActorId,
    pub kind: ActorKind,
    /// Tick the actor entered the world.
    pub origin: u64,
    /// Tick the actor died, if it has.
    pub end: Option<u64>,
}

impl SimActor {
    pub fn is_alive(&self) -> bool {
        self.end.is_none()
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPosition(pub Position);

/// Feather colour of a parrot-shaped actor.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Plumage(pub Variant);

/// Taming and sit-order state carried across conversion.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tameable {
    pub tame: bool,
    pub owner: Option<ActorId>,
    pub ordered_to_sit: bool,
}

impl Tameable {
    pub fn tamed_by(owner: ActorId) -> Self {
        Self {
            tame: true,
            owner: Some(owner),
            ordered_to_sit: false,
        }
    }
}

/// Marks an actor that emits no sounds or world sound events.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Silent;

/// Per-actor deterministic random source.
#[derive(Component, Debug, Clone)]
pub struct ActorRng(pub SmallRng);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnReason {
    Natural,
    Breeding,
    Conversion,
    Load,
}

/// How an actor entered the world.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnOrigin(pub SpawnReason);
