use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Simulation clock resource counting elapsed ticks.
///
/// The `advance_clock` system moves the clock forward at the end of each
/// tick (in `SimPhase::Last`), so systems see the current tick before it
/// advances.
#[derive(Resource, Debug, Default)]
pub struct SimClock {
    pub tick_count: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(tick_count: u64) -> Self {
        Self { tick_count }
    }

    pub fn advance(&mut self) {
        self.tick_count += 1;
    }
}

/// Bevy system that advances the simulation clock by one tick.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
