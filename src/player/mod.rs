pub mod controller;
pub mod input;
pub mod inventory;
pub mod mining;

pub use controller::{place_block, Placement};
pub use input::{EdgeTrigger, InputSnapshot, SlotKeys};
pub use inventory::{Inventory, InventorySlot, INVENTORY_SLOTS, MAX_STACK};
pub use mining::{MiningOutcome, MiningSession, MiningState};

use crate::config::gameplay::GameplayConfig;
use crate::physics::Body;
use glam::{IVec2, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub inventory: Inventory,
    pub mining: MiningSession,
}

impl Player {
    /// Player with its top-left corner at `position` and the configured
    /// starting stacks.
    pub fn new(position: Vec2, config: &GameplayConfig) -> Self {
        Self {
            body: Body::new(
                position,
                Vec2::new(config.player_width, config.player_height),
            ),
            inventory: Inventory::with_stacks(&config.starting_inventory),
            mining: MiningSession::new(config.mining.clone()),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn on_ground(&self) -> bool {
        self.body.on_ground
    }

    /// Block coordinate used for reach checks.
    pub fn block_cell(&self, block_size: f32) -> IVec2 {
        self.body.cell(block_size)
    }

    /// Top-left of a `viewport`-sized view centred on the player.
    pub fn camera_offset(&self, viewport: Vec2) -> Vec2 {
        self.body.center() - viewport * 0.5
    }
}
