use crate::config::worldgen::WorldGenConfig;
use crate::utils::error::{ConfigError, GridError};
use crate::world::block::Block;
use crate::world::chunk::Chunk;
use crate::world::chunk_coord::{ChunkCoord, ChunkRect, LocalPos};
use crate::world::generator::TerrainGenerator;
use log::trace;
use std::collections::HashMap;

/// Rows outside `[WORLD_MIN_Y, WORLD_MAX_Y]` always read as air.
pub const WORLD_MIN_Y: i32 = -100;
pub const WORLD_MAX_Y: i32 = 100;

/// Sparse chunk storage over a fixed rectangle.
///
/// The rectangle is generated once and never grows: a chunk that is missing
/// from the map lies outside the world, it is not "not loaded yet". Reads
/// there return air; writes there fail with `GridError::UngeneratedChunk`.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    chunks: HashMap<ChunkCoord, Chunk>,
    seed: u32,
    bounds: ChunkRect,
}

impl World {
    pub fn new(seed: u32, bounds: ChunkRect) -> Self {
        Self {
            chunks: HashMap::with_capacity(bounds.len()),
            seed,
            bounds,
        }
    }

    /// Runs terrain generation over the configured rectangle.
    pub fn generate(config: &WorldGenConfig) -> Result<Self, ConfigError> {
        Ok(TerrainGenerator::new(config.clone())?.generate())
    }

    /// Every chunk in `bounds` present but filled with air.
    pub fn empty(seed: u32, bounds: ChunkRect) -> Self {
        let mut world = Self::new(seed, bounds);
        for coord in bounds.iter() {
            world.insert_chunk(Chunk::new(coord));
        }
        world
    }

    pub(crate) fn insert_chunk(&mut self, chunk: Chunk) {
        debug_assert!(self.bounds.contains(chunk.position));
        self.chunks.insert(chunk.position, chunk);
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn bounds(&self) -> ChunkRect {
        self.bounds
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn contains_chunk(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn get_block(&self, x: i32, y: i32) -> Block {
        if !(WORLD_MIN_Y..=WORLD_MAX_Y).contains(&y) {
            return Block::AIR;
        }

        let local = LocalPos::from_world(x, y);
        match self.chunks.get(&local.chunk) {
            Some(chunk) => chunk.get(local.x, local.y),
            None => Block::AIR,
        }
    }

    /// Writes `block` and returns what was there before.
    pub fn set_block(&mut self, x: i32, y: i32, block: Block) -> Result<Block, GridError> {
        if !(WORLD_MIN_Y..=WORLD_MAX_Y).contains(&y) {
            return Err(GridError::OutOfBounds { y });
        }

        let local = LocalPos::from_world(x, y);
        let chunk = self
            .chunks
            .get_mut(&local.chunk)
            .ok_or(GridError::UngeneratedChunk { chunk: local.chunk })?;

        let previous = chunk.get(local.x, local.y);
        chunk.set(local.x, local.y, block);
        trace!("set ({}, {}) {:?} -> {:?}", x, y, previous.kind, block.kind);
        Ok(previous)
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get_block(x, y).is_solid()
    }

    /// Topmost solid row of a column inside the generated rectangle.
    pub fn surface_y(&self, x: i32) -> Option<i32> {
        let (top, bottom) = self.bounds.row_span();
        let top = top.max(WORLD_MIN_Y);
        let bottom = bottom.min(WORLD_MAX_Y);
        (top..=bottom).find(|&y| self.is_solid(x, y))
    }
}
