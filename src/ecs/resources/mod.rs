pub mod blocks;
pub mod entity_map;
pub mod event_log;
pub mod sim_resources;

pub use blocks::BlockWorld;
pub use entity_map::ActorMap;
pub use event_log::EventLog;
pub use sim_resources::{
    Difficulty, EcsIdGenerator, Side, SimConfig, actor_rng, derive_actor_seed,
};
