pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod conditions;
pub mod events;
pub mod hooks;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::{
    build_sim_app, build_sim_app_deterministic, build_sim_app_seeded, build_sim_app_with_config,
};
pub use clock::SimClock;
pub use commands::{SimCommand, SimCommandKind, apply_sim_commands, queue_command};
pub use components::{
    ActiveEffects, ActorRng, ConversionTimer, Plumage, Silent, SimActor, SpawnOrigin, SpawnReason,
    SyncedConverting, Tameable, WorldPosition,
};
pub use conditions::authoritative;
pub use events::{EntityEvent, LevelEvent, SimReactiveEvent};
pub use hooks::{ActorSnapshot, AllowAll, ConversionHook, ConversionHooks};
pub use plugin::SimPlugin;
pub use resources::{ActorMap, BlockWorld, Difficulty, EcsIdGenerator, EventLog, Side, SimConfig};
pub use schedule::{DomainSet, SimPhase, SimTick, configure_sim_schedule};
pub use spawn::{ActorSpawn, spawn_actor, spawn_new_actor};
pub use systems::breeding::breed;
pub use systems::conversion::interact;
pub use systems::sync::{ObserverReplica, SoundCue, SyncMessage, SyncOutbox};
