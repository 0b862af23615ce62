use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// The negative marker that makes an undead actor curable.
    Weakness,
    /// Applied for the length of a conversion.
    Strength,
    /// Applied to a freshly converted actor.
    Nausea,
}

/// A timed status effect. `amplifier` is signed: some callers compute it
/// from expressions that can go below zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectInstance {
    pub kind: EffectKind,
    pub duration: i32,
    pub amplifier: i32,
}

impl EffectInstance {
    pub fn new(kind: EffectKind, duration: i32, amplifier: i32) -> Self {
        Self {
            kind,
            duration,
            amplifier,
        }
    }

    /// Count down one tick. Returns false once the effect has run out.
    pub fn tick(&mut self) -> bool {
        if self.duration > 0 {
            self.duration -= 1;
        }
        self.duration > 0
    }
}
