use crate::world::block::BlockType;
use crate::world::chunk_coord::ChunkCoord;
use std::io;
use thiserror::Error;

/// Failures when writing into the block grid. Reads never fail; they degrade
/// to the empty block instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("chunk {chunk:?} was never generated; the world does not extend there")]
    UngeneratedChunk { chunk: ChunkCoord },

    #[error("row {y} is outside the vertical world limit")]
    OutOfBounds { y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("inventory is full, dropped one {kind:?}")]
    Full { kind: BlockType },

    #[error("air cannot be stored")]
    EmptyBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("cell ({x}, {y}) is already occupied by {occupant:?}")]
    Occupied { x: i32, y: i32, occupant: BlockType },

    #[error("slot {slot} holds nothing to place")]
    EmptySlot { slot: usize },

    #[error("slot {slot} does not exist")]
    InvalidSlot { slot: usize },

    #[error("grid rejected the placement: {0}")]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MiningError {
    #[error("failed to clear mined cell: {0}")]
    Grid(#[from] GridError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
