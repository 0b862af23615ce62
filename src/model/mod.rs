#[macro_use]
mod macros;

pub mod actor;
pub mod block;
pub mod effect;
pub mod event;
pub mod item;
pub mod record;

pub use actor::{ActorId, ActorKind, MobType, Position, SoundSet, Variant};
pub use block::{BlockKind, BlockPos, BlockSource};
pub use effect::{EffectInstance, EffectKind};
pub use event::{Event, EventKind};
pub use item::{InteractionResult, Interactor, ItemKind, ItemStack};
pub use record::{ActorRecord, NOT_CONVERTING};
