use serde::{Deserialize, Serialize};

/// Integer block coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Air,
    Stone,
    Dirt,
    Wool,
    Carpet,
    Bed,
}

impl BlockKind {
    /// Floor coverings and beds speed up recovery.
    pub fn is_comfort(self) -> bool {
        matches!(self, BlockKind::Carpet | BlockKind::Bed)
    }
}

/// Read-only view of world geometry.
pub trait BlockSource {
    fn block_at(&self, pos: BlockPos) -> BlockKind;
}

impl<F: Fn(BlockPos) -> BlockKind> BlockSource for F {
    fn block_at(&self, pos: BlockPos) -> BlockKind {
        self(pos)
    }
}
