use crate::world::block::BlockType;
use serde::{Deserialize, Serialize};

/// Per-step constants, in world units (pixels) per step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub friction: f32,
    pub move_acceleration: f32,
    pub jump_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            terminal_velocity: 15.0,
            friction: 0.9,
            move_acceleration: 1.0,
            jump_velocity: -15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Reach, in blocks, measured from the player's block coordinate.
    pub range: f32,
    pub speed: f64,
    /// Mining time credited per held step.
    pub tick_increment: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            range: 6.0,
            speed: 1.0,
            tick_increment: 3.0 / 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingStack {
    pub kind: BlockType,
    pub count: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub block_size: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub physics: PhysicsConfig,
    pub mining: MiningConfig,
    pub starting_inventory: Vec<StartingStack>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            block_size: 40.0,
            player_width: 30.0,
            player_height: 50.0,
            physics: PhysicsConfig::default(),
            mining: MiningConfig::default(),
            starting_inventory: vec![
                StartingStack {
                    kind: BlockType::Dirt,
                    count: 64,
                },
                StartingStack {
                    kind: BlockType::Stone,
                    count: 64,
                },
                StartingStack {
                    kind: BlockType::Wood,
                    count: 64,
                },
            ],
        }
    }
}
