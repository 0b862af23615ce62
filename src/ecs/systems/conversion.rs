//! Curing an undead actor.
//!
//! 1. `interact`: a cure item given to a weakened actor starts the countdown
//! 2. `tick_conversions`: each tick takes estimated progress off the timer;
//!    at zero the veto hook is consulted and, if it agrees, a `ConvertActor`
//!    command is queued for the applicator
//!
//! Only the authoritative side counts down or starts conversions.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageWriter, Messages};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use bevy_ecs::world::World;
use rand::Rng;

use crate::ecs::clock::SimClock;
use crate::ecs::commands::{SimCommand, SimCommandKind};
use crate::ecs::components::{
    ActiveEffects, ActorRng, ConversionTimer, Plumage, Silent, SimActor, Tameable, WorldPosition,
};
use crate::ecs::conditions::authoritative;
use crate::ecs::events::{CURE_STARTED_EVENT, EntityEvent};
use crate::ecs::hooks::{ActorSnapshot, ConversionHooks};
use crate::ecs::resources::{BlockWorld, Difficulty, EventLog, SimConfig};
use crate::ecs::schedule::{DomainSet, SimTick};
use crate::model::{
    ActorId, EffectInstance, EffectKind, EventKind, InteractionResult, Interactor, ItemStack,
    Position,
};

use super::progress::estimate_progress;

/// Eye height of a parrot-shaped actor above its feet.
pub const EYE_HEIGHT: f64 = 0.54;

pub struct ConversionPlugin;

impl Plugin for ConversionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            tick_conversions
                .run_if(authoritative)
                .in_set(DomainSet::Conversion),
        );
    }
}

/// Amplifier of the strength effect granted while converting.
/// `min(difficulty - 1, 0)`: zero on every difficulty except peaceful.
pub fn strength_amplifier(difficulty: Difficulty) -> i32 {
    (difficulty.id() - 1).min(0)
}

pub fn eye_position(position: Position) -> Position {
    Position::new(position.x, position.y + EYE_HEIGHT, position.z)
}

// ---------------------------------------------------------------------------
// Interaction
// ---------------------------------------------------------------------------

/// Hand `stack` to the actor at `target`.
///
/// A cure item given to a convertible actor carrying weakness is used up
/// (unless the interactor has unlimited items) and starts a conversion of
/// random length. Without weakness the item is recognized but ignored.
/// Anything else passes through to the caller's default handling.
pub fn interact(
    world: &mut World,
    target: Entity,
    interactor: Interactor,
    stack: &mut ItemStack,
) -> InteractionResult {
    let Some(actor) = world.get::<SimActor>(target).cloned() else {
        return InteractionResult::Passthrough;
    };
    if !actor.is_alive() || !actor.kind.is_convertible() || !stack.kind.is_cure() {
        return InteractionResult::Passthrough;
    }

    let weakened = world
        .get::<ActiveEffects>(target)
        .is_some_and(|effects| effects.has(EffectKind::Weakness));
    if !weakened {
        return InteractionResult::Ignored;
    }

    if !interactor.unlimited {
        stack.shrink(1);
    }

    let config = world
        .get_resource::<SimConfig>()
        .cloned()
        .unwrap_or_default();
    if config.is_authoritative() {
        let lo = config.conversion_min_ticks.min(config.conversion_max_ticks);
        let hi = config.conversion_min_ticks.max(config.conversion_max_ticks);
        let duration = match world.get_mut::<ActorRng>(target) {
            Some(mut rng) => rng.0.random_range(lo..=hi),
            None => lo,
        };
        begin_conversion(world, target, Some(interactor.id), duration);
    }

    InteractionResult::Consumed
}

/// Arm the conversion timer and apply its side effects: weakness is
/// removed, strength is granted for `duration` ticks and the cure-started
/// event is broadcast. Shared by interaction and by loading a saved actor.
pub(crate) fn begin_conversion(
    world: &mut World,
    entity: Entity,
    initiator: Option<ActorId>,
    duration: i32,
) -> bool {
    let Some(actor) = world.get::<SimActor>(entity).cloned() else {
        return false;
    };
    let difficulty = world
        .get_resource::<SimConfig>()
        .map_or(Difficulty::Normal, |config| config.difficulty);
    let tick = world
        .get_resource::<SimClock>()
        .map_or(0, |clock| clock.tick_count);
    let position = world
        .get::<WorldPosition>(entity)
        .map(|p| p.0)
        .unwrap_or_default();
    let silent = world.get::<Silent>(entity).is_some();

    match world.get_mut::<ConversionTimer>(entity) {
        Some(mut timer) => timer.start(initiator, duration),
        None => {
            tracing::warn!(actor = %actor.id, kind = ?actor.kind, "actor has no conversion timer");
            return false;
        }
    }

    if let Some(mut effects) = world.get_mut::<ActiveEffects>(entity) {
        effects.remove(EffectKind::Weakness);
        effects.add(EffectInstance::new(
            EffectKind::Strength,
            duration,
            strength_amplifier(difficulty),
        ));
    }

    if let Some(mut messages) = world.get_resource_mut::<Messages<EntityEvent>>() {
        messages.write(EntityEvent {
            actor: actor.id,
            code: CURE_STARTED_EVENT,
            eye_position: eye_position(position),
            silent,
        });
    }

    if let Some(mut log) = world.get_resource_mut::<EventLog>() {
        log.record(
            EventKind::ConversionStarted,
            tick,
            actor.id,
            format!("{} begins recovering", actor.id),
            serde_json::json!({
                "duration": duration,
                "initiator": initiator.map(|id| id.0),
            }),
        );
    }

    tracing::debug!(actor = %actor.id, duration, ?initiator, "conversion started");
    true
}

// ---------------------------------------------------------------------------
// Countdown
// ---------------------------------------------------------------------------

#[allow(clippy::type_complexity)]
fn tick_conversions(
    clock: Res<SimClock>,
    blocks: Res<BlockWorld>,
    mut hooks: ResMut<ConversionHooks>,
    mut event_log: ResMut<EventLog>,
    mut actors: Query<(
        Entity,
        &SimActor,
        &WorldPosition,
        &Tameable,
        &Plumage,
        &mut ConversionTimer,
        &mut ActorRng,
    )>,
    mut commands: MessageWriter<SimCommand>,
) {
    for (entity, actor, position, tameable, plumage, mut timer, mut rng) in actors.iter_mut() {
        if !actor.is_alive() || !timer.is_active() {
            continue;
        }

        let before = timer.remaining();
        let step = estimate_progress(&mut rng.0, position.0, &*blocks);
        if timer.decrement(step) > 0 {
            continue;
        }

        let Some(into) = actor.kind.conversion_target() else {
            continue;
        };

        let snapshot = ActorSnapshot {
            entity,
            id: actor.id,
            kind: actor.kind,
            position: position.0,
            tame: tameable.tame,
            owner: tameable.owner,
            ordered_to_sit: tameable.ordered_to_sit,
            variant: plumage.0,
        };
        let mut rescheduled = None;
        let allowed = hooks
            .0
            .can_convert(&snapshot, into, &mut |ticks| rescheduled = Some(ticks));

        if allowed {
            let initiator = timer.finish();
            commands.write(SimCommand::new(
                SimCommandKind::ConvertActor { entity, initiator },
                format!("{} recovers into a {into:?}", actor.id),
            ));
        } else if let Some(ticks) = rescheduled {
            timer.reschedule(ticks);
            event_log.record(
                EventKind::ConversionRescheduled,
                clock.tick_count,
                actor.id,
                format!("{} conversion deferred", actor.id),
                serde_json::json!({ "remaining": ticks }),
            );
            tracing::debug!(actor = %actor.id, remaining = ticks, "conversion rescheduled");
        } else if before > 0 {
            // Vetoed without a new duration: stay due and ask again next tick.
            event_log.record(
                EventKind::ConversionStalled,
                clock.tick_count,
                actor.id,
                format!("{} conversion stalled", actor.id),
                serde_json::Value::Null,
            );
            tracing::warn!(actor = %actor.id, "conversion vetoed without reschedule");
        }
    }
}
