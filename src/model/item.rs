use serde::{Deserialize, Serialize};

use super::actor::ActorId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    GoldenApple,
    WheatSeeds,
    Cookie,
    Stick,
}

impl ItemKind {
    /// The item that starts curing an undead actor.
    pub fn is_cure(self) -> bool {
        self == ItemKind::GoldenApple
    }
}

/// A mutable stack of items held by an interacting actor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub count: u32,
}

impl ItemStack {
    pub fn new(kind: ItemKind, count: u32) -> Self {
        Self { kind, count }
    }

    pub fn shrink(&mut self, amount: u32) {
        self.count = self.count.saturating_sub(amount);
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The actor on the other end of an interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interactor {
    pub id: ActorId,
    /// Creative-style mode where held items are never used up.
    pub unlimited: bool,
}

impl Interactor {
    pub fn new(id: ActorId) -> Self {
        Self {
            id,
            unlimited: false,
        }
    }

    pub fn unlimited(id: ActorId) -> Self {
        Self {
            id,
            unlimited: true,
        }
    }
}

/// Outcome of an interaction attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InteractionResult {
    /// The item was used and the interaction took effect.
    Consumed,
    /// The item was recognized but nothing happened.
    Ignored,
    /// Not handled here; the caller should try its default behavior.
    Passthrough,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_saturates_at_empty() {
        let mut stack = ItemStack::new(ItemKind::GoldenApple, 1);
        stack.shrink(1);
        assert!(stack.is_empty());
        stack.shrink(1);
        assert_eq!(stack.count, 0);
    }

    #[test]
    fn only_golden_apple_cures() {
        assert!(ItemKind::GoldenApple.is_cure());
        assert!(!ItemKind::Cookie.is_cure());
    }
}
