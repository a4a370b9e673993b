use crate::world::block::{Block, BlockType};
use crate::world::chunk_coord::ChunkCoord;
use glam::IVec2;

pub const CHUNK_SIZE: usize = 16;
pub const CHUNK_AREA: usize = CHUNK_SIZE * CHUNK_SIZE;

/// Fixed 16x16 tile of the world, indexed `[x][y]` in local coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub position: ChunkCoord,
    blocks: [[Block; CHUNK_SIZE]; CHUNK_SIZE],
}

impl Chunk {
    pub fn new(position: ChunkCoord) -> Self {
        Self {
            position,
            blocks: [[Block::AIR; CHUNK_SIZE]; CHUNK_SIZE],
        }
    }

    pub fn filled(position: ChunkCoord, block: Block) -> Self {
        Self {
            position,
            blocks: [[block; CHUNK_SIZE]; CHUNK_SIZE],
        }
    }

    /// Local coordinates must be below `CHUNK_SIZE`; callers derive them from
    /// `LocalPos`, which guarantees that.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Block {
        self.blocks[x][y]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, block: Block) {
        self.blocks[x][y] = block;
    }

    pub fn is_air(&self, x: usize, y: usize) -> bool {
        self.blocks[x][y].is_air()
    }

    pub fn count(&self, kind: BlockType) -> usize {
        self.blocks
            .iter()
            .flatten()
            .filter(|block| block.kind == kind)
            .count()
    }

    /// Every cell with its world coordinate, column by column.
    pub fn iter_world(&self) -> impl Iterator<Item = (IVec2, Block)> + '_ {
        let origin = self.position.origin();
        self.blocks.iter().enumerate().flat_map(move |(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, block)| (origin + IVec2::new(x as i32, y as i32), *block))
        })
    }
}
