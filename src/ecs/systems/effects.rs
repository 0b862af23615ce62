use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::Query;

use crate::ecs::components::{ActiveEffects, SimActor};
use crate::ecs::conditions::authoritative;
use crate::ecs::schedule::{DomainSet, SimTick};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            tick_effects
                .run_if(authoritative)
                .in_set(DomainSet::Effects),
        );
    }
}

/// Count every living actor's status effects down by one tick.
fn tick_effects(mut actors: Query<(&SimActor, &mut ActiveEffects)>) {
    for (actor, mut effects) in actors.iter_mut() {
        if !actor.is_alive() || effects.is_empty() {
            continue;
        }
        for kind in effects.tick() {
            tracing::trace!(actor = %actor.id, ?kind, "effect expired");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::app::build_sim_app;
    use crate::ecs::spawn::{ActorSpawn, spawn_new_actor};
    use crate::ecs::test_helpers::tick_n;
    use crate::model::{ActorKind, EffectInstance, EffectKind, Position};

    #[test]
    fn effects_expire_after_duration() {
        let mut app = build_sim_app();
        app.add_plugins(EffectsPlugin);
        let parrot = spawn_new_actor(
            app.world_mut(),
            ActorSpawn::new(ActorKind::Parrot, Position::default())
                .effect(EffectInstance::new(EffectKind::Nausea, 3, 0)),
        );

        tick_n(&mut app, 2);
        let effects = app.world().get::<ActiveEffects>(parrot).unwrap();
        assert_eq!(effects.get(EffectKind::Nausea).unwrap().duration, 1);

        tick_n(&mut app, 1);
        assert!(!app.world().get::<ActiveEffects>(parrot).unwrap().has(EffectKind::Nausea));
    }
}
