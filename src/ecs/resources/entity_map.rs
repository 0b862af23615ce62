use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::model::ActorId;

/// Bidirectional mapping between actor IDs and Bevy entities.
///
/// Conversion moves an ID onto a new entity with [`ActorMap::remap`], so
/// lookups by ID keep working after the source entity is gone.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActorMap {
    to_bevy: BTreeMap<ActorId, Entity>,
    to_actor: BTreeMap<Entity, ActorId>,
}

impl ActorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. Panics if the actor id is already registered.
    pub fn insert(&mut self, id: ActorId, entity: Entity) {
        let prev = self.to_bevy.insert(id, entity);
        assert!(prev.is_none(), "duplicate {id} in ActorMap");
        self.to_actor.insert(entity, id);
    }

    /// Point `id` at a different entity, dropping the old entity's entry.
    pub fn remap(&mut self, id: ActorId, entity: Entity) {
        if let Some(old) = self.to_bevy.insert(id, entity) {
            self.to_actor.remove(&old);
        }
        self.to_actor.insert(entity, id);
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Entity> {
        let entity = self.to_bevy.remove(&id)?;
        self.to_actor.remove(&entity);
        Some(entity)
    }

    pub fn get_bevy(&self, id: ActorId) -> Option<Entity> {
        self.to_bevy.get(&id).copied()
    }

    /// Look up a Bevy entity by actor id. Panics if not found.
    pub fn bevy(&self, id: ActorId) -> Entity {
        *self
            .to_bevy
            .get(&id)
            .unwrap_or_else(|| panic!("no Bevy entity for {id}"))
    }

    pub fn get_actor(&self, entity: Entity) -> Option<ActorId> {
        self.to_actor.get(&entity).copied()
    }

    pub fn len(&self) -> usize {
        self.to_bevy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_bevy.is_empty()
    }
}
