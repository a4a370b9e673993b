use crate::world::blocks_data::definition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Air,
    Grass,
    Dirt,
    Stone,
    Wood,
    Leaves,
}

impl BlockType {
    pub const ALL: [BlockType; 6] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Leaves,
    ];

    pub fn is_air(self) -> bool {
        self == BlockType::Air
    }

    pub fn is_solid(self) -> bool {
        !self.is_air()
    }

    pub fn hardness(self) -> u8 {
        definition(self).hardness
    }

    pub fn name(self) -> &'static str {
        definition(self).name
    }

    /// RGBA display color, for collaborators that draw the grid.
    pub fn color(self) -> [u8; 4] {
        definition(self).color
    }
}

/// A grid cell. `hardness` is copied from the catalog when the block is
/// created and never changes afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Block {
    pub kind: BlockType,
    pub hardness: u8,
}

impl Block {
    pub const AIR: Block = Block {
        kind: BlockType::Air,
        hardness: 0,
    };

    pub fn new(kind: BlockType) -> Self {
        Self {
            kind,
            hardness: kind.hardness(),
        }
    }

    pub fn is_air(&self) -> bool {
        self.kind.is_air()
    }

    pub fn is_solid(&self) -> bool {
        self.kind.is_solid()
    }
}

impl From<BlockType> for Block {
    fn from(kind: BlockType) -> Self {
        Block::new(kind)
    }
}
