use serde::{Deserialize, Serialize};

use super::actor::{ActorId, ActorKind, Position, Variant};
use super::effect::EffectInstance;

/// Stored conversion time for an actor that is not converting.
pub const NOT_CONVERTING: i32 = -1;

/// Durable form of one actor, written on save and read back on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActorRecord {
    pub id: ActorId,
    pub kind: ActorKind,
    pub position: Position,
    #[serde(default)]
    pub tame: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<ActorId>,
    #[serde(default)]
    pub ordered_to_sit: bool,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub silent: bool,
    #[serde(default = "default_alive")]
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<EffectInstance>,
    /// Remaining conversion ticks, or [`NOT_CONVERTING`].
    #[serde(default = "default_conversion_time")]
    pub conversion_time: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_initiator: Option<ActorId>,
}

fn default_alive() -> bool {
    true
}

fn default_conversion_time() -> i32 {
    NOT_CONVERTING
}

impl ActorRecord {
    /// Whether loading this record should resume a conversion.
    pub fn resumes_conversion(&self) -> bool {
        self.conversion_time > NOT_CONVERTING
    }
}
