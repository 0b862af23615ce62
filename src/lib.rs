pub mod ecs;
pub mod flush;
pub mod id;
pub mod model;
pub mod persist;

pub use id::IdGenerator;
pub use model::{
    ActorId, ActorKind, ActorRecord, EffectInstance, EffectKind, Event, EventKind,
    InteractionResult, Interactor, ItemKind, ItemStack, Position, Variant,
};
pub use persist::{load_actor, restore_actors, save_actor, snapshot_actors};
