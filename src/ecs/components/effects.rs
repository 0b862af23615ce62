use std::collections::BTreeMap;

use bevy_ecs::component::Component;

use crate::model::{EffectInstance, EffectKind};

/// Status effects currently on an actor, at most one per kind.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ActiveEffects {
    effects: BTreeMap<EffectKind, EffectInstance>,
}

impl ActiveEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_instances(instances: impl IntoIterator<Item = EffectInstance>) -> Self {
        let mut effects = Self::new();
        for instance in instances {
            effects.add(instance);
        }
        effects
    }

    pub fn has(&self, kind: EffectKind) -> bool {
        self.effects.contains_key(&kind)
    }

    pub fn get(&self, kind: EffectKind) -> Option<&EffectInstance> {
        self.effects.get(&kind)
    }

    /// Apply an effect, replacing any existing one of the same kind.
    pub fn add(&mut self, instance: EffectInstance) {
        self.effects.insert(instance.kind, instance);
    }

    pub fn remove(&mut self, kind: EffectKind) -> Option<EffectInstance> {
        self.effects.remove(&kind)
    }

    /// Count every effect down one tick and drop the expired ones.
    /// Returns the kinds that expired.
    pub fn tick(&mut self) -> Vec<EffectKind> {
        let mut expired = Vec::new();
        self.effects.retain(|kind, instance| {
            let live = instance.tick();
            if !live {
                expired.push(*kind);
            }
            live
        });
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectInstance> {
        self.effects.values()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_replaces_same_kind() {
        let mut effects = ActiveEffects::new();
        effects.add(EffectInstance::new(EffectKind::Strength, 100, 1));
        effects.add(EffectInstance::new(EffectKind::Strength, 50, 0));
        assert_eq!(effects.get(EffectKind::Strength).unwrap().duration, 50);
        assert_eq!(effects.iter().count(), 1);
    }

    #[test]
    fn tick_drops_expired() {
        let mut effects = ActiveEffects::from_instances([
            EffectInstance::new(EffectKind::Nausea, 1, 0),
            EffectInstance::new(EffectKind::Weakness, 10, 0),
        ]);
        let expired = effects.tick();
        assert_eq!(expired, vec![EffectKind::Nausea]);
        assert!(!effects.has(EffectKind::Nausea));
        assert_eq!(effects.get(EffectKind::Weakness).unwrap().duration, 9);
    }
}
