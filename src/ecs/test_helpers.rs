use bevy_app::App;

use crate::ecs::clock::SimClock;
use crate::ecs::schedule::SimTick;

/// Run `n` simulation ticks.
pub fn tick_n(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Run ticks until `done` returns true or `limit` ticks have passed.
/// Returns the number of ticks run.
pub fn tick_until(app: &mut App, limit: u32, mut done: impl FnMut(&App) -> bool) -> u32 {
    for ran in 0..limit {
        if done(app) {
            return ran;
        }
        app.world_mut().run_schedule(SimTick);
    }
    limit
}

/// Return the current tick from the clock resource.
pub fn current_tick(app: &App) -> u64 {
    app.world().resource::<SimClock>().tick_count
}
