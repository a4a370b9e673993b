pub mod block;
pub mod blocks_data;
pub mod chunk;
pub mod chunk_coord;
pub mod core;
pub mod generator;
pub mod shared;

// Re-export commonly used types
pub use block::{Block, BlockType};
pub use blocks_data::{BlockDefinition, BLOCKS};
pub use chunk::{Chunk, CHUNK_SIZE};
pub use chunk_coord::{ChunkCoord, ChunkRect, LocalPos};
pub use self::core::{World, WORLD_MAX_Y, WORLD_MIN_Y};
pub use generator::TerrainGenerator;
pub use shared::SharedWorld;
