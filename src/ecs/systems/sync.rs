//! One-way replication of cosmetic conversion state to observers.
//!
//! The authoritative app owns the truth. Once per tick (in `SimPhase::Last`)
//! `publish_sync` pushes changes down an in-process channel to every
//! subscribed [`ObserverReplica`]. Replicas can live on other threads and
//! never write anything back.

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender};

use bevy_app::{App, Plugin};
use bevy_ecs::message::MessageReader;
use bevy_ecs::resource::Resource;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, ResMut};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ecs::clock::advance_clock;
use crate::ecs::components::{ConversionTimer, SimActor, SyncedConverting};
use crate::ecs::conditions::authoritative;
use crate::ecs::events::{CURE_STARTED_EVENT, EntityEvent, SimReactiveEvent};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::model::{ActorId, ActorKind, Position};

/// Sound played locally when an observer sees a cure start.
pub const CURE_SOUND: &str = "entity.zombie_villager.cure";

#[derive(Debug, Clone, PartialEq)]
pub enum SyncMessage {
    /// The actor's `converting` flag changed.
    Converting { actor: ActorId, converting: bool },
    /// A cosmetic entity event.
    EntityEvent {
        actor: ActorId,
        code: u8,
        eye_position: Position,
        silent: bool,
    },
    /// The actor finished converting and is now `into`.
    Converted { actor: ActorId, into: ActorKind },
}

/// Outbound side of the replication channel.
#[derive(Resource, Default)]
pub struct SyncOutbox {
    subscribers: Vec<Sender<SyncMessage>>,
}

impl SyncOutbox {
    /// Attach a new observer. `seed` drives its presentational randomness.
    pub fn subscribe(&mut self, seed: u64) -> ObserverReplica {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        ObserverReplica::new(rx, seed)
    }

    /// Send to every subscriber, forgetting the ones that hung up.
    pub fn publish(&mut self, message: SyncMessage) {
        self.subscribers
            .retain(|tx| tx.send(message.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

pub struct SyncPlugin;

impl Plugin for SyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            publish_sync
                .run_if(authoritative)
                .in_set(SimPhase::Last)
                .before(advance_clock),
        );
    }
}

fn publish_sync(
    mut outbox: ResMut<SyncOutbox>,
    mut actors: Query<(&SimActor, &ConversionTimer, &mut SyncedConverting)>,
    mut entity_events: MessageReader<EntityEvent>,
    mut reactive: MessageReader<SimReactiveEvent>,
) {
    for (actor, timer, mut synced) in actors.iter_mut() {
        let converting = timer.is_active();
        if synced.published != converting {
            synced.published = converting;
            outbox.publish(SyncMessage::Converting {
                actor: actor.id,
                converting,
            });
        }
    }

    for event in entity_events.read() {
        outbox.publish(SyncMessage::EntityEvent {
            actor: event.actor,
            code: event.code,
            eye_position: event.eye_position,
            silent: event.silent,
        });
    }

    for event in reactive.read() {
        if let SimReactiveEvent::Converted { actor, into, .. } = event {
            outbox.publish(SyncMessage::Converted {
                actor: *actor,
                into: *into,
            });
        }
    }
}

/// A locally played sound.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundCue {
    pub sound: &'static str,
    pub position: Position,
    pub volume: f32,
    pub pitch: f32,
}

/// Read-only mirror of replicated state on an observer.
pub struct ObserverReplica {
    rx: Receiver<SyncMessage>,
    converting: BTreeMap<ActorId, bool>,
    kinds: BTreeMap<ActorId, ActorKind>,
    rng: SmallRng,
    cues: Vec<SoundCue>,
}

impl ObserverReplica {
    fn new(rx: Receiver<SyncMessage>, seed: u64) -> Self {
        Self {
            rx,
            converting: BTreeMap::new(),
            kinds: BTreeMap::new(),
            rng: SmallRng::seed_from_u64(seed),
            cues: Vec::new(),
        }
    }

    /// Apply every queued message without blocking. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.apply(message);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, message: SyncMessage) {
        match message {
            SyncMessage::Converting { actor, converting } => {
                self.converting.insert(actor, converting);
            }
            SyncMessage::EntityEvent {
                code: CURE_STARTED_EVENT,
                eye_position,
                silent,
                ..
            } => {
                if !silent {
                    self.cues.push(SoundCue {
                        sound: CURE_SOUND,
                        position: eye_position,
                        volume: 1.0 + self.rng.random::<f32>(),
                        pitch: self.rng.random::<f32>() * 0.7 + 0.3,
                    });
                }
            }
            SyncMessage::EntityEvent { actor, code, .. } => {
                tracing::trace!(%actor, code, "unhandled entity event");
            }
            SyncMessage::Converted { actor, into } => {
                self.converting.remove(&actor);
                self.kinds.insert(actor, into);
            }
        }
    }

    /// Whether the observer currently shows `actor` as converting.
    pub fn is_converting(&self, actor: ActorId) -> bool {
        self.converting.get(&actor).copied().unwrap_or(false)
    }

    /// Kind an actor was last seen converting into.
    pub fn converted_kind(&self, actor: ActorId) -> Option<ActorKind> {
        self.kinds.get(&actor).copied()
    }

    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_replicas_are_forgotten() {
        let mut outbox = SyncOutbox::default();
        let keep = outbox.subscribe(1);
        let gone = outbox.subscribe(2);
        drop(gone);
        outbox.publish(SyncMessage::Converting {
            actor: ActorId(1),
            converting: true,
        });
        assert_eq!(outbox.subscriber_count(), 1);
        drop(keep);
    }

    #[test]
    fn cure_event_plays_sound_unless_silent() {
        let mut outbox = SyncOutbox::default();
        let mut replica = outbox.subscribe(3);
        let loud = SyncMessage::EntityEvent {
            actor: ActorId(1),
            code: CURE_STARTED_EVENT,
            eye_position: Position::new(0.0, 1.0, 0.0),
            silent: false,
        };
        let quiet = SyncMessage::EntityEvent {
            actor: ActorId(2),
            code: CURE_STARTED_EVENT,
            eye_position: Position::default(),
            silent: true,
        };
        outbox.publish(loud);
        outbox.publish(quiet);
        assert_eq!(replica.pump(), 2);

        let cues = replica.drain_cues();
        assert_eq!(cues.len(), 1);
        let cue = &cues[0];
        assert_eq!(cue.sound, CURE_SOUND);
        assert!((1.0..2.0).contains(&cue.volume));
        assert!((0.3..1.0).contains(&cue.pitch));
    }

    #[test]
    fn converted_clears_flag() {
        let mut outbox = SyncOutbox::default();
        let mut replica = outbox.subscribe(4);
        outbox.publish(SyncMessage::Converting {
            actor: ActorId(9),
            converting: true,
        });
        replica.pump();
        assert!(replica.is_converting(ActorId(9)));

        outbox.publish(SyncMessage::Converted {
            actor: ActorId(9),
            into: ActorKind::Parrot,
        });
        replica.pump();
        assert!(!replica.is_converting(ActorId(9)));
        assert_eq!(replica.converted_kind(ActorId(9)), Some(ActorKind::Parrot));
    }
}
