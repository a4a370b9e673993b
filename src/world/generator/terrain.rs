use crate::config::worldgen::{CaveNoiseKind, WorldGenConfig};
use crate::utils::error::ConfigError;
use crate::world::block::{Block, BlockType};
use crate::world::chunk::{Chunk, CHUNK_SIZE};
use crate::world::chunk_coord::{ChunkCoord, ChunkRect};
use crate::world::core::World;
use crate::world::generator::sine::{Remapped, SineNoise};
use log::{debug, info, trace};
use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rayon::prelude::*;

// Cave field frequency, applied after the cave_scale stretch
const CAVE_FREQUENCY: f64 = 0.1;
const CAVE_SEED_FACTOR: f64 = 0.7;
const DIRT_DEPTH: i32 = 3;
const CANOPY_HALF_WIDTH: i32 = 2;
const CANOPY_HEIGHT: i32 = 4;

pub struct TerrainGenerator {
    config: WorldGenConfig,
    seed: u32,
    height_noise: SineNoise,
    cave_noise: Box<dyn NoiseFn<f64, 2> + Send + Sync>,
}

impl TerrainGenerator {
    /// Validates `config` and fixes its seed, drawing one if it is unset.
    pub fn new(mut config: WorldGenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.resolve_seed();

        let height_noise = SineNoise::new(
            seed,
            config.height_frequency,
            config.detail_frequency,
            config.detail_seed_factor,
        );

        let cave_noise: Box<dyn NoiseFn<f64, 2> + Send + Sync> = match config.cave_noise {
            CaveNoiseKind::Sine => Box::new(SineNoise::new(
                seed,
                CAVE_FREQUENCY,
                CAVE_FREQUENCY,
                CAVE_SEED_FACTOR,
            )),
            CaveNoiseKind::Perlin => Box::new(Remapped(Perlin::new(seed))),
        };

        Ok(Self {
            config,
            seed,
            height_noise,
            cave_noise,
        })
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Builds every chunk of the configured rectangle.
    pub fn generate(&self) -> World {
        self.generate_rect(self.config.chunk_rect())
    }

    pub fn generate_rect(&self, rect: ChunkRect) -> World {
        let mut world = World::new(self.seed, rect);

        // Chunks seed their own RNG, so build order does not matter
        let built: Vec<(Chunk, usize)> = rect
            .iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|coord| self.build_chunk(coord))
            .collect();

        let mut trees = 0;
        for (chunk, planted) in built {
            trees += planted;
            world.insert_chunk(chunk);
        }

        info!(
            "Generated {} chunks ({} trees) for seed {}",
            world.chunk_count(),
            trees,
            self.seed
        );
        world
    }

    pub fn generate_chunk(&self, coord: ChunkCoord) -> Chunk {
        self.build_chunk(coord).0
    }

    /// Surface height of a world column. Grass sits at `height - 3`, stone
    /// starts below `height`.
    pub fn height_at(&self, x: i32) -> i32 {
        let x = x as f64;
        let shape = self.height_noise.get([x, x]);
        (self.config.base_height + self.config.height_amplitude * shape).floor() as i32
    }

    pub fn is_cave(&self, x: i32, y: i32) -> bool {
        let scale = self.config.cave_scale;
        self.cave_noise.get([x as f64 * scale, y as f64 * scale]) > self.config.cave_threshold
    }

    /// Terrain layer for a single cell, ignoring trees.
    pub fn terrain_at(&self, x: i32, y: i32, height: i32) -> BlockType {
        if y > height + self.config.cave_margin && self.is_cave(x, y) {
            BlockType::Air
        } else if y > height {
            BlockType::Stone
        } else if y > height - DIRT_DEPTH {
            BlockType::Dirt
        } else if y == height - DIRT_DEPTH {
            BlockType::Grass
        } else {
            BlockType::Air
        }
    }

    fn build_chunk(&self, coord: ChunkCoord) -> (Chunk, usize) {
        let mut chunk = Chunk::new(coord);
        let origin = coord.origin();
        let mut heights = [0i32; CHUNK_SIZE];

        for (lx, height) in heights.iter_mut().enumerate() {
            let world_x = origin.x + lx as i32;
            *height = self.height_at(world_x);
            for ly in 0..CHUNK_SIZE {
                let world_y = origin.y + ly as i32;
                let kind = self.terrain_at(world_x, world_y, *height);
                if kind.is_solid() {
                    chunk.set(lx, ly, Block::new(kind));
                }
            }
        }

        let mut rng = chunk_rng(self.seed, coord);
        let planted = self.plant_trees(&mut chunk, &heights, &mut rng);
        debug!("Built chunk {:?} with {} trees", coord, planted);
        (chunk, planted)
    }

    /// Second pass over a fully filled chunk. Trunks are written before the
    /// canopy is evaluated, and the canopy only claims air.
    fn plant_trees(
        &self,
        chunk: &mut Chunk,
        heights: &[i32; CHUNK_SIZE],
        rng: &mut ChaCha12Rng,
    ) -> usize {
        let origin_y = chunk.position.origin().y;
        let size = CHUNK_SIZE as i32;
        let margin = self.config.tree_edge_margin;
        let mut planted = 0;

        for lx in (margin + 1)..CHUNK_SIZE.saturating_sub(margin) {
            let surface = heights[lx] - DIRT_DEPTH - origin_y;
            if !(0..size).contains(&surface) || chunk.get(lx, surface as usize).kind != BlockType::Grass {
                continue;
            }
            if !rng.gen_bool(self.config.tree_chance) {
                continue;
            }

            let trunk = self.config.trunk_min + rng.gen_range(0..self.config.trunk_variance);
            for step in 1..=trunk {
                let ly = surface - step;
                if ly >= 0 {
                    chunk.set(lx, ly as usize, Block::new(BlockType::Wood));
                }
            }

            let top = surface - trunk - 1;
            let lx = lx as i32;
            for dx in -CANOPY_HALF_WIDTH..=CANOPY_HALF_WIDTH {
                for dy in -(CANOPY_HEIGHT - 1)..=0 {
                    let (nx, ny) = (lx + dx, top + dy);
                    if !(0..size).contains(&nx) || !(0..size).contains(&ny) {
                        continue;
                    }
                    if chunk.is_air(nx as usize, ny as usize) {
                        chunk.set(nx as usize, ny as usize, Block::new(BlockType::Leaves));
                    }
                }
            }

            trace!(
                "Tree at ({}, {}) trunk {}",
                chunk.position.origin().x + lx,
                origin_y + surface,
                trunk
            );
            planted += 1;
        }

        planted
    }
}

fn chunk_rng(seed: u32, coord: ChunkCoord) -> ChaCha12Rng {
    let mixed = (seed as u64)
        .wrapping_add((coord.x() as i64 as u64).wrapping_mul(341873128712))
        .wrapping_add((coord.y() as i64 as u64).wrapping_mul(132897987541));
    ChaCha12Rng::seed_from_u64(mixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u32) -> WorldGenConfig {
        WorldGenConfig {
            world_seed: Some(seed),
            chunk_min: [-2, -1],
            chunk_max: [1, 1],
            ..WorldGenConfig::default()
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = TerrainGenerator::new(small_config(777)).unwrap().generate();
        let b = TerrainGenerator::new(small_config(777)).unwrap().generate();
        assert_eq!(a, b);
        assert_eq!(a.chunk_count(), 12);
    }

    #[test]
    fn test_chunk_independent_of_rect() {
        let generator = TerrainGenerator::new(small_config(31)).unwrap();
        let world = generator.generate();
        let alone = generator.generate_chunk(ChunkCoord::new(-1, 0));
        assert_eq!(world.chunk(ChunkCoord::new(-1, 0)), Some(&alone));
    }

    #[test]
    fn test_column_layers() {
        let generator = TerrainGenerator::new(WorldGenConfig {
            tree_chance: 0.0,
            ..small_config(5)
        })
        .unwrap();
        let world = generator.generate();

        for x in -32..32 {
            let h = generator.height_at(x);
            assert!((10..=15).contains(&h));
            assert_eq!(world.get_block(x, h - 3).kind, BlockType::Grass);
            assert_eq!(world.get_block(x, h - 2).kind, BlockType::Dirt);
            assert_eq!(world.get_block(x, h).kind, BlockType::Dirt);
            assert_eq!(world.get_block(x, h + 1).kind, BlockType::Stone);
            assert!(world.get_block(x, h - 4).is_air());
            // Caves only open below the margin
            for y in (h + 1)..=(h + 5) {
                assert_eq!(world.get_block(x, y).kind, BlockType::Stone);
            }
        }
    }

    #[test]
    fn test_caves_follow_noise_threshold() {
        let generator = TerrainGenerator::new(WorldGenConfig {
            tree_chance: 0.0,
            ..small_config(11)
        })
        .unwrap();
        let world = generator.generate();
        for x in -32..32 {
            let h = generator.height_at(x);
            for y in (h + 6)..32 {
                let expected = if generator.is_cave(x, y) {
                    BlockType::Air
                } else {
                    BlockType::Stone
                };
                assert_eq!(world.get_block(x, y).kind, expected);
            }
        }
    }

    #[test]
    fn test_trees_grow_from_grass_and_canopy_keeps_trunks() {
        let generator = TerrainGenerator::new(WorldGenConfig {
            tree_chance: 1.0,
            ..small_config(2024)
        })
        .unwrap();
        let world = generator.generate();
        let mut trunks = 0;

        for coord in world.bounds().iter() {
            let chunk = world.chunk(coord).unwrap();
            let origin = coord.origin();
            for lx in 3..14 {
                let x = origin.x + lx;
                let surface = generator.height_at(x) - 3;
                if surface < origin.y || surface >= origin.y + 16 {
                    continue;
                }
                // Every eligible column gets a tree with chance 1.0, and later
                // canopies must not have eaten into its trunk
                assert_eq!(world.get_block(x, surface).kind, BlockType::Grass);
                for step in 1..=4 {
                    if surface - step >= origin.y {
                        assert_eq!(world.get_block(x, surface - step).kind, BlockType::Wood);
                    }
                }
                trunks += 1;
            }

            // Leaves only ever occupy sky cells
            for (pos, block) in chunk.iter_world() {
                if block.kind == BlockType::Leaves {
                    assert!(pos.y < generator.height_at(pos.x) - 3);
                }
            }
        }
        assert!(trunks > 0);
    }

    #[test]
    fn test_edge_columns_have_no_trunks() {
        let generator = TerrainGenerator::new(WorldGenConfig {
            tree_chance: 1.0,
            ..small_config(99)
        })
        .unwrap();
        let world = generator.generate();
        for coord in world.bounds().iter() {
            let origin = coord.origin();
            for lx in [0, 1, 2, 14, 15] {
                let x = origin.x + lx;
                let surface = generator.height_at(x) - 3;
                let above = surface - 1;
                if above >= origin.y && above < origin.y + 16 {
                    assert_ne!(world.get_block(x, above).kind, BlockType::Wood);
                }
            }
        }
    }

    #[test]
    fn test_perlin_caves_are_deterministic() {
        let config = WorldGenConfig {
            cave_noise: CaveNoiseKind::Perlin,
            ..small_config(3)
        };
        let a = TerrainGenerator::new(config.clone()).unwrap().generate();
        let b = TerrainGenerator::new(config).unwrap().generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_tree_settings_rejected() {
        for config in [
            WorldGenConfig {
                trunk_variance: 0,
                tree_chance: 1.0,
                ..small_config(1)
            },
            WorldGenConfig {
                tree_chance: 1.5,
                ..small_config(1)
            },
        ] {
            assert!(matches!(
                TerrainGenerator::new(config.clone()),
                Err(ConfigError::Invalid(_))
            ));
            assert!(matches!(World::generate(&config), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_unset_seed_resolved_before_generation() {
        let generator = TerrainGenerator::new(WorldGenConfig {
            world_seed: None,
            ..small_config(0)
        })
        .unwrap();
        assert_eq!(generator.config().world_seed, Some(generator.seed()));

        // Regenerating from the resolved config reproduces the world
        let replay = TerrainGenerator::new(generator.config().clone()).unwrap();
        assert_eq!(generator.generate(), replay.generate());
        assert_eq!(generator.generate().seed(), generator.seed());
    }
}
