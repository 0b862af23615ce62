//! Extension points the host plugs into conversion.
//!
//! A single [`ConversionHook`] is installed as the [`ConversionHooks`]
//! resource. It is asked once per completion attempt whether the conversion
//! may go ahead, and told about every conversion that does.

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::model::{ActorId, ActorKind, Position, Variant};

/// Read-only view of an actor handed to hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorSnapshot {
    pub entity: Entity,
    pub id: ActorId,
    pub kind: ActorKind,
    pub position: Position,
    pub tame: bool,
    pub owner: Option<ActorId>,
    pub ordered_to_sit: bool,
    pub variant: Variant,
}

pub trait ConversionHook: Send + Sync {
    /// Whether `actor` may turn into `into` now.
    ///
    /// An implementation that returns `false` is expected to call
    /// `reschedule` with a positive tick count. If it does not, the timer
    /// stays at or below zero and the hook is asked again on every later tick.
    fn can_convert(
        &mut self,
        actor: &ActorSnapshot,
        into: ActorKind,
        reschedule: &mut dyn FnMut(i32),
    ) -> bool {
        let _ = (actor, into, reschedule);
        true
    }

    /// Fire-and-forget notice after `source` became `target`.
    fn on_converted(&mut self, source: &ActorSnapshot, target: &ActorSnapshot) {
        let _ = (source, target);
    }
}

/// Hook that never vetoes and ignores notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl ConversionHook for AllowAll {}

#[derive(Resource)]
pub struct ConversionHooks(pub Box<dyn ConversionHook>);

impl ConversionHooks {
    pub fn new(hook: impl ConversionHook + 'static) -> Self {
        Self(Box::new(hook))
    }
}

impl Default for ConversionHooks {
    fn default() -> Self {
        Self::new(AllowAll)
    }
}
