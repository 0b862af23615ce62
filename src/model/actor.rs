use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Stable identity of an actor. Survives save/reload and conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Every actor representation the simulation knows about.
///
/// The two undead kinds share their behavior through the methods below
/// instead of a type hierarchy: callers match on the tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Parrot,
    ZombieParrot,
    SkeletonParrot,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobType {
    Undefined,
    Undead,
}

/// Sound events an actor kind uses for hurt and death.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SoundSet {
    pub hurt: &'static str,
    pub death: &'static str,
}

impl ActorKind {
    /// The kind this actor turns into when its conversion completes.
    pub fn conversion_target(self) -> Option<ActorKind> {
        match self {
            ActorKind::ZombieParrot => Some(ActorKind::Parrot),
            ActorKind::Parrot | ActorKind::SkeletonParrot => None,
        }
    }

    pub fn is_convertible(self) -> bool {
        self.conversion_target().is_some()
    }

    pub fn mob_type(self) -> MobType {
        match self {
            ActorKind::Parrot => MobType::Undefined,
            ActorKind::ZombieParrot | ActorKind::SkeletonParrot => MobType::Undead,
        }
    }

    /// Plain parrots do not produce offspring; both undead kinds do.
    pub fn can_breed(self) -> bool {
        matches!(self, ActorKind::ZombieParrot | ActorKind::SkeletonParrot)
    }

    pub fn sound_set(self) -> SoundSet {
        match self {
            ActorKind::SkeletonParrot => SoundSet {
                hurt: "entity.skeleton.hurt",
                death: "entity.skeleton.death",
            },
            ActorKind::Parrot | ActorKind::ZombieParrot => SoundSet {
                hurt: "entity.parrot.hurt",
                death: "entity.parrot.death",
            },
        }
    }
}

/// Visual variant (feather colour) of a parrot-shaped actor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    RedBlue,
    Blue,
    Green,
    YellowBlue,
    Gray,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::RedBlue,
        Variant::Blue,
        Variant::Green,
        Variant::YellowBlue,
        Variant::Gray,
    ];

    /// Roll a uniformly random variant.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// World position in continuous coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Integer block coordinates, truncated toward zero.
    pub fn truncated(&self) -> super::block::BlockPos {
        super::block::BlockPos::new(self.x as i32, self.y as i32, self.z as i32)
    }

    /// Block containing this position (floor), used for world events.
    pub fn block_pos(&self) -> super::block::BlockPos {
        super::block::BlockPos::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::model::block::BlockPos;

    #[test]
    fn only_zombie_parrot_converts() {
        assert_eq!(
            ActorKind::ZombieParrot.conversion_target(),
            Some(ActorKind::Parrot)
        );
        assert_eq!(ActorKind::SkeletonParrot.conversion_target(), None);
        assert_eq!(ActorKind::Parrot.conversion_target(), None);
    }

    #[test]
    fn undead_kinds_classify_and_breed() {
        assert_eq!(ActorKind::ZombieParrot.mob_type(), MobType::Undead);
        assert_eq!(ActorKind::SkeletonParrot.mob_type(), MobType::Undead);
        assert_eq!(ActorKind::Parrot.mob_type(), MobType::Undefined);
        assert!(ActorKind::SkeletonParrot.can_breed());
        assert!(!ActorKind::Parrot.can_breed());
        assert_eq!(
            ActorKind::SkeletonParrot.sound_set().hurt,
            "entity.skeleton.hurt"
        );
    }

    #[test]
    fn truncation_differs_from_floor_for_negatives() {
        let pos = Position::new(-0.5, 64.9, 3.2);
        assert_eq!(pos.truncated(), BlockPos::new(0, 64, 3));
        assert_eq!(pos.block_pos(), BlockPos::new(-1, 64, 3));
    }

    #[test]
    fn random_variant_covers_all() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Variant::random(&mut rng));
        }
        assert_eq!(seen.len(), Variant::ALL.len());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActorKind::ZombieParrot).unwrap();
        assert_eq!(json, "\"zombie_parrot\"");
    }
}
