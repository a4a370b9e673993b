use crate::utils::error::{ConfigError, Result};
use crate::world::chunk_coord::{ChunkCoord, ChunkRect};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaveNoiseKind {
    /// Layered sine field, the classic look.
    Sine,
    /// `noise::Perlin` sampled at the same scaled coordinates.
    Perlin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    // World Generation
    /// Left unset, every new world draws its own seed.
    pub world_seed: Option<u32>,
    pub chunk_min: [i32; 2],
    pub chunk_max: [i32; 2],

    // Heightmap
    pub base_height: f64,
    pub height_amplitude: f64,
    pub height_frequency: f64,
    pub detail_frequency: f64,
    pub detail_seed_factor: f64,

    // Caves
    pub cave_noise: CaveNoiseKind,
    pub cave_margin: i32,
    pub cave_scale: f64,
    pub cave_threshold: f64,

    // Trees
    pub tree_chance: f64,
    pub tree_edge_margin: usize,
    pub trunk_min: i32,
    pub trunk_variance: i32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            world_seed: None,
            chunk_min: [-5, -2],
            chunk_max: [5, 3],
            base_height: 10.0,
            height_amplitude: 5.0,
            height_frequency: 0.1,
            detail_frequency: 0.1,
            detail_seed_factor: 0.7,
            cave_noise: CaveNoiseKind::Sine,
            cave_margin: 5,
            cave_scale: 0.15,
            cave_threshold: 0.6,
            tree_chance: 0.1,
            tree_edge_margin: 2,
            trunk_min: 4,
            trunk_variance: 3,
        }
    }
}

impl WorldGenConfig {
    /// Fixes the seed for this world, drawing a random one if none is set.
    pub fn resolve_seed(&mut self) -> u32 {
        match self.world_seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                info!("Drew world seed {}", seed);
                self.world_seed = Some(seed);
                seed
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_rect().is_empty() {
            return Err(ConfigError::Invalid("chunk_min must not exceed chunk_max".into()));
        }
        if self.trunk_min < 1 || self.trunk_variance < 1 {
            return Err(ConfigError::Invalid(
                "trunk_min and trunk_variance must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.tree_chance) {
            return Err(ConfigError::Invalid("tree_chance must lie in [0, 1]".into()));
        }
        if self.cave_margin < 0 {
            return Err(ConfigError::Invalid("cave_margin must not be negative".into()));
        }
        Ok(())
    }

    pub fn chunk_rect(&self) -> ChunkRect {
        ChunkRect::new(
            ChunkCoord::new(self.chunk_min[0], self.chunk_min[1]),
            ChunkCoord::new(self.chunk_max[0], self.chunk_max[1]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_seed_is_drawn_once() {
        let mut config = WorldGenConfig::default();
        assert_eq!(config.world_seed, None);
        let seed = config.resolve_seed();
        assert_eq!(config.world_seed, Some(seed));
        assert_eq!(config.resolve_seed(), seed);
    }

    #[test]
    fn test_explicit_seed_kept() {
        let mut config = WorldGenConfig {
            world_seed: Some(12345),
            ..WorldGenConfig::default()
        };
        assert_eq!(config.resolve_seed(), 12345);
    }

    #[test]
    fn test_tree_settings_checked() {
        let zero_variance = WorldGenConfig {
            trunk_variance: 0,
            ..WorldGenConfig::default()
        };
        assert!(matches!(zero_variance.validate(), Err(ConfigError::Invalid(_))));

        let certain_plus = WorldGenConfig {
            tree_chance: 1.5,
            ..WorldGenConfig::default()
        };
        assert!(matches!(certain_plus.validate(), Err(ConfigError::Invalid(_))));
        assert!(WorldGenConfig::default().validate().is_ok());
    }
}
