pub mod config;
pub mod engine;
pub mod physics;
pub mod player;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::core::EngineConfig;
pub use config::gameplay::GameplayConfig;
pub use config::worldgen::WorldGenConfig;
pub use engine::{Engine, MiningView, StepReport};
pub use physics::{Body, CollisionReport, PlayerPhysicsHandler};
pub use player::input::{InputSnapshot, SlotKeys};
pub use player::inventory::Inventory;
pub use player::mining::{MiningOutcome, MiningSession};
pub use player::Player;
pub use utils::error::{ConfigError, GridError, InventoryError, MiningError, PlacementError};
pub use world::block::{Block, BlockType};
pub use world::chunk::Chunk;
pub use world::chunk_coord::ChunkCoord;
pub use world::generator::terrain::TerrainGenerator;
pub use world::{SharedWorld, World};
