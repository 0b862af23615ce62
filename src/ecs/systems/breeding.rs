//! Offspring rules shared by both undead parrot kinds.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::Rng;

use crate::ecs::commands::{SimCommand, SimCommandKind, queue_command};
use crate::ecs::components::{SimActor, Tameable};
use crate::model::Variant;

/// Pick the offspring's variant: a fair coin chooses between the parent's
/// variant and the one the offspring rolled for itself.
pub fn inherit_variant(rng: &mut impl Rng, parent: Variant, own: Variant) -> Variant {
    if rng.random_bool(0.5) { parent } else { own }
}

/// Taming state of a new offspring. If either parent is tame the child is
/// tame too, owned by the first tame parent's owner.
pub fn offspring_tameness(parent: &Tameable, mate: Option<&Tameable>) -> Tameable {
    let tame_parent = std::iter::once(parent)
        .chain(mate)
        .find(|t| t.tame);
    match tame_parent {
        Some(t) => Tameable {
            tame: true,
            owner: t.owner,
            ordered_to_sit: false,
        },
        None => Tameable::default(),
    }
}

/// Queue the birth of an offspring of `parent`. Returns false if `parent`
/// is not an actor that can breed.
pub fn breed(world: &mut World, parent: Entity, mate: Option<Entity>) -> bool {
    let Some(actor) = world.get::<SimActor>(parent).cloned() else {
        return false;
    };
    if !actor.is_alive() || !actor.kind.can_breed() {
        return false;
    }
    queue_command(
        world,
        SimCommand::new(
            SimCommandKind::BreedOffspring { parent, mate },
            format!("{} has an offspring", actor.id),
        ),
    );
    true
}
