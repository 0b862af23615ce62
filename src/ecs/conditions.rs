use bevy_ecs::system::Res;

use super::resources::SimConfig;

/// Run condition: only the authoritative side drives countdowns,
/// effects and conversions.
pub fn authoritative(config: Res<SimConfig>) -> bool {
    config.is_authoritative()
}
