use std::collections::HashMap;

use bevy_ecs::resource::Resource;

use crate::model::{BlockKind, BlockPos, BlockSource};

/// Sparse world geometry. Unset positions read as air.
#[derive(Resource, Debug, Clone, Default)]
pub struct BlockWorld {
    blocks: HashMap<BlockPos, BlockKind>,
}

impl BlockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, pos: BlockPos, kind: BlockKind) {
        if kind == BlockKind::Air {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, kind);
        }
    }

    /// Fill the inclusive box between `from` and `to` with `kind`.
    pub fn fill(&mut self, from: BlockPos, to: BlockPos, kind: BlockKind) {
        for x in from.x.min(to.x)..=from.x.max(to.x) {
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                for z in from.z.min(to.z)..=from.z.max(to.z) {
                    self.set(BlockPos::new(x, y, z), kind);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl BlockSource for BlockWorld {
    fn block_at(&self, pos: BlockPos) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }
}
