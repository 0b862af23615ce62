use std::hash::{DefaultHasher, Hash, Hasher};

use bevy_ecs::resource::Resource;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::IdGenerator;
use crate::model::ActorId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Peaceful,
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn id(self) -> i32 {
        match self {
            Difficulty::Peaceful => 0,
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// Which half of a replicated simulation this app is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Owns the truth: runs countdowns and fires conversions.
    Authoritative,
    /// Mirrors state for display only.
    Observer,
}

/// Simulation configuration.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub seed: u64,
    pub difficulty: Difficulty,
    pub side: Side,
    pub conversion_min_ticks: i32,
    pub conversion_max_ticks: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: Difficulty::Normal,
            side: Side::Authoritative,
            conversion_min_ticks: 3600,
            conversion_max_ticks: 6000,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn is_authoritative(&self) -> bool {
        self.side == Side::Authoritative
    }
}

/// Derive a deterministic per-actor seed from the global seed and actor id.
pub fn derive_actor_seed(seed: u64, actor: ActorId) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    "actor".hash(&mut hasher);
    actor.hash(&mut hasher);
    hasher.finish()
}

/// Build the RNG an actor carries for its whole life.
pub fn actor_rng(seed: u64, actor: ActorId) -> SmallRng {
    SmallRng::seed_from_u64(derive_actor_seed(seed, actor))
}

/// Global ID generator for actors.
#[derive(Resource, Default)]
pub struct EcsIdGenerator(pub IdGenerator);

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config = SimConfig::from_json(r#"{"seed": 7, "difficulty": "hard"}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.side, Side::Authoritative);
        assert_eq!(config.conversion_min_ticks, 3600);
        assert_eq!(config.conversion_max_ticks, 6000);
    }

    #[test]
    fn actor_rngs_are_reproducible_and_distinct() {
        let a1: u64 = actor_rng(42, ActorId(1)).random();
        let a2: u64 = actor_rng(42, ActorId(1)).random();
        let b: u64 = actor_rng(42, ActorId(2)).random();
        assert_eq!(a1, a2);
        assert_ne!(a1, b);
    }

    #[test]
    fn difficulty_ids() {
        assert_eq!(Difficulty::Peaceful.id(), 0);
        assert_eq!(Difficulty::Hard.id(), 3);
    }
}
