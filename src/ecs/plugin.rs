use bevy_app::{App, Plugin};

use super::systems::conversion::ConversionPlugin;
use super::systems::effects::EffectsPlugin;
use super::systems::sync::SyncPlugin;

/// Aggregate plugin that installs every simulation domain plugin.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((ConversionPlugin, EffectsPlugin, SyncPlugin));
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::schedule::ExecutorKind;

    use super::*;
    use crate::ecs::app::{build_sim_app_deterministic, build_sim_app_seeded, build_sim_app_with_config};
    use crate::ecs::clock::SimClock;
    use crate::ecs::components::ConversionTimer;
    use crate::ecs::resources::{ActorMap, EventLog, SimConfig};
    use crate::ecs::spawn::{ActorSpawn, spawn_new_actor};
    use crate::ecs::systems::conversion::interact;
    use crate::ecs::test_helpers::tick_n;
    use crate::model::{ActorId, ActorKind, EffectInstance, EffectKind, Interactor, ItemKind, ItemStack, Position};

    fn spawn_weakened_flock(app: &mut App, count: usize) {
        for i in 0..count {
            let zombie = spawn_new_actor(
                app.world_mut(),
                ActorSpawn::new(ActorKind::ZombieParrot, Position::new(i as f64 * 3.0, 64.0, 0.0))
                    .effect(EffectInstance::new(EffectKind::Weakness, 100_000, 0)),
            );
            let mut apple = ItemStack::new(ItemKind::GoldenApple, 1);
            interact(
                app.world_mut(),
                zombie,
                Interactor::new(ActorId(1000)),
                &mut apple,
            );
        }
    }

    #[test]
    fn sim_plugin_smoke_test_multithreaded() {
        let mut app = build_sim_app_seeded(42);
        app.add_plugins(SimPlugin);
        spawn_weakened_flock(&mut app, 3);
        tick_n(&mut app, 100);
        assert_eq!(app.world().resource::<SimClock>().tick_count, 100);
    }

    #[test]
    fn whole_flock_converts_within_max_duration() {
        let mut app = build_sim_app_deterministic(42);
        app.add_plugins(SimPlugin);
        spawn_weakened_flock(&mut app, 3);
        tick_n(&mut app, 6001);

        let log = app.world().resource::<EventLog>();
        assert_eq!(log.of_kind(crate::model::EventKind::Converted).count(), 3);
        let mut timers = app.world_mut().query::<&ConversionTimer>();
        assert_eq!(timers.iter(app.world()).count(), 0);
        assert_eq!(app.world().resource::<ActorMap>().len(), 3);
    }

    #[test]
    fn deterministic_runs_produce_identical_event_logs() {
        let run = || {
            let mut app = build_sim_app_with_config(
                SimConfig {
                    seed: 7,
                    ..SimConfig::default()
                },
                ExecutorKind::SingleThreaded,
            );
            app.add_plugins(SimPlugin);
            spawn_weakened_flock(&mut app, 4);
            tick_n(&mut app, 6001);
            app.world()
                .resource::<EventLog>()
                .events
                .iter()
                .map(|e| (e.kind, e.tick, e.actor))
                .collect::<Vec<_>>()
        };
        let first = run();
        assert!(!first.is_empty());
        assert_eq!(first, run());
    }
}
