pub mod error;
pub mod math;

pub use error::{ConfigError, GridError, InventoryError, MiningError, PlacementError};
