//! Per-tick conversion progress.
//!
//! Most ticks advance a conversion by exactly one. Rarely the actor looks at
//! its surroundings: each floor covering or bed nearby may add another tick
//! of progress.

use rand::Rng;

use crate::model::{BlockPos, BlockSource, Position};

/// Chance per call that the surroundings are scanned at all.
pub const SCAN_CHANCE: f32 = 0.01;
/// Chance each comfort block found adds one tick of progress.
pub const COMFORT_BONUS_CHANCE: f32 = 0.3;
/// The scan stops after this many comfort blocks have been seen.
pub const MAX_COMFORT_BLOCKS: u32 = 14;
/// Half-width of the scanned cube. The range is `[c - 4, c + 4)` on each axis.
pub const SCAN_RADIUS: i32 = 4;

/// How many ticks to take off a running conversion this tick. Always `>= 1`.
pub fn estimate_progress<R, B>(rng: &mut R, position: Position, blocks: &B) -> i32
where
    R: Rng,
    B: BlockSource + ?Sized,
{
    let mut progress = 1;
    if rng.random::<f32>() >= SCAN_CHANCE {
        return progress;
    }

    let center = position.truncated();
    let mut seen = 0u32;
    'scan: for x in (center.x - SCAN_RADIUS)..(center.x + SCAN_RADIUS) {
        for y in (center.y - SCAN_RADIUS)..(center.y + SCAN_RADIUS) {
            for z in (center.z - SCAN_RADIUS)..(center.z + SCAN_RADIUS) {
                if seen >= MAX_COMFORT_BLOCKS {
                    break 'scan;
                }
                let kind = blocks.block_at(BlockPos::new(x, y, z));
                if kind.is_comfort() {
                    if rng.random::<f32>() < COMFORT_BONUS_CHANCE {
                        progress += 1;
                    }
                    seen += 1;
                }
            }
        }
    }

    tracing::trace!(seen, progress, "comfort scan");
    progress
}
