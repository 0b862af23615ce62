pub mod common;
pub mod conversion;
pub mod effects;

pub use common::{
    ActorRng, Plumage, Silent, SimActor, SpawnOrigin, SpawnReason, Tameable, WorldPosition,
};
pub use conversion::{ConversionTimer, SyncedConverting};
pub use effects::ActiveEffects;
