pub mod core;
pub mod gameplay;
pub mod worldgen;

pub use self::core::EngineConfig;
pub use gameplay::{GameplayConfig, MiningConfig, PhysicsConfig, StartingStack};
pub use worldgen::{CaveNoiseKind, WorldGenConfig};
