use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::SimClock;
use super::commands::{SimCommand, apply_sim_commands};
use super::events::{EntityEvent, LevelEvent, SimReactiveEvent};
use super::hooks::ConversionHooks;
use super::resources::{ActorMap, BlockWorld, EcsIdGenerator, EventLog, SimConfig};
use super::schedule::{SimPhase, configure_sim_schedule};
use super::systems::sync::SyncOutbox;

/// Build a headless Bevy app with the default configuration.
///
/// Manual tick control:
/// ```no_run
/// # use pet_cemetery::ecs::{build_sim_app, SimTick};
/// let mut app = build_sim_app();
/// for _ in 0..6000 {
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app() -> App {
    build_sim_app_seeded(42)
}

/// Build a headless Bevy app with a specific RNG seed and multi-threaded executor.
pub fn build_sim_app_seeded(seed: u64) -> App {
    build_sim_app_with_config(
        SimConfig {
            seed,
            ..SimConfig::default()
        },
        ExecutorKind::MultiThreaded,
    )
}

/// Build a headless Bevy app with single-threaded executor for reproducible determinism.
pub fn build_sim_app_deterministic(seed: u64) -> App {
    build_sim_app_with_config(
        SimConfig {
            seed,
            ..SimConfig::default()
        },
        ExecutorKind::SingleThreaded,
    )
}

/// Build a headless Bevy app from a full configuration and executor kind.
pub fn build_sim_app_with_config(config: SimConfig, executor: ExecutorKind) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(config);
    app.insert_resource(SimClock::new());
    app.insert_resource(EventLog::new());
    app.insert_resource(EcsIdGenerator::default());
    app.insert_resource(ActorMap::new());
    app.insert_resource(BlockWorld::new());
    app.insert_resource(ConversionHooks::default());
    app.insert_resource(SyncOutbox::default());

    // Register message types
    MessageRegistry::register_message::<SimCommand>(app.world_mut());
    MessageRegistry::register_message::<SimReactiveEvent>(app.world_mut());
    MessageRegistry::register_message::<EntityEvent>(app.world_mut());
    MessageRegistry::register_message::<LevelEvent>(app.world_mut());

    // Build schedule with message rotation + applicator
    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(apply_sim_commands.in_set(SimPhase::PostUpdate));
    app.add_schedule(schedule);
    app
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use bevy_ecs::schedule::IntoScheduleConfigs;
    use bevy_ecs::system::Res;

    use super::*;
    use crate::ecs::resources::Side;
    use crate::ecs::schedule::{SimPhase, SimTick};

    #[test]
    fn app_builds_without_panic() {
        let _app = build_sim_app();
    }

    #[test]
    fn config_is_installed() {
        let app = build_sim_app_with_config(
            SimConfig {
                seed: 9,
                side: Side::Observer,
                ..SimConfig::default()
            },
            ExecutorKind::SingleThreaded,
        );
        let config = app.world().resource::<SimConfig>();
        assert_eq!(config.seed, 9);
        assert_eq!(config.side, Side::Observer);
    }

    #[test]
    fn single_tick_advances_clock() {
        let mut app = build_sim_app();
        app.world_mut().run_schedule(SimTick);
        assert_eq!(app.world().resource::<SimClock>().tick_count, 1);
    }

    #[test]
    fn update_system_runs_every_tick() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let mut app = build_sim_app();
        app.add_systems(
            SimTick,
            (move |_clock: Res<SimClock>| {
                counter_clone.fetch_add(1, Ordering::Relaxed);
            })
            .in_set(SimPhase::Update),
        );

        for _ in 0..25 {
            app.world_mut().run_schedule(SimTick);
        }
        assert_eq!(counter.load(Ordering::Relaxed), 25);
    }

    #[test]
    fn phase_ordering_respected() {
        let log = Arc::new(std::sync::Mutex::new(Vec::<&'static str>::new()));

        let log1 = log.clone();
        let log2 = log.clone();
        let log3 = log.clone();
        let log4 = log.clone();

        let mut app = build_sim_app();
        app.add_systems(
            SimTick,
            (move || {
                log1.lock().unwrap().push("pre_update");
            })
            .in_set(SimPhase::PreUpdate),
        );
        app.add_systems(
            SimTick,
            (move || {
                log2.lock().unwrap().push("update");
            })
            .in_set(SimPhase::Update),
        );
        app.add_systems(
            SimTick,
            (move || {
                log3.lock().unwrap().push("post_update");
            })
            .in_set(SimPhase::PostUpdate),
        );
        app.add_systems(
            SimTick,
            (move || {
                log4.lock().unwrap().push("last");
            })
            .in_set(SimPhase::Last),
        );

        app.world_mut().run_schedule(SimTick);

        let entries = log.lock().unwrap();
        let pre_idx = entries.iter().position(|&s| s == "pre_update").unwrap();
        let update_idx = entries.iter().position(|&s| s == "update").unwrap();
        let post_idx = entries.iter().position(|&s| s == "post_update").unwrap();
        let last_idx = entries.iter().position(|&s| s == "last").unwrap();
        assert!(pre_idx < update_idx);
        assert!(update_idx < post_idx);
        assert!(post_idx < last_idx);
    }
}
