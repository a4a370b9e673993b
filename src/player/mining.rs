use crate::config::gameplay::MiningConfig;
use crate::player::inventory::Inventory;
use crate::utils::error::{InventoryError, MiningError};
use crate::utils::math::cell_distance;
use crate::world::block::{Block, BlockType};
use crate::world::World;
use glam::IVec2;
use log::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MiningState {
    #[default]
    Idle,
    Mining { target: IVec2, elapsed_ticks: u32 },
}

/// What a single mining update did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MiningOutcome {
    Idle,
    Progress {
        target: IVec2,
        fraction: f64,
    },
    /// The cell was cleared. `grant` is the slot that received the block, or
    /// the reason it was dropped.
    Broken {
        target: IVec2,
        kind: BlockType,
        grant: Result<usize, InventoryError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiningSession {
    state: MiningState,
    config: MiningConfig,
}

impl MiningSession {
    pub fn new(config: MiningConfig) -> Self {
        Self {
            state: MiningState::Idle,
            config,
        }
    }

    pub fn state(&self) -> MiningState {
        self.state
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, MiningState::Mining { .. })
    }

    pub fn target(&self) -> Option<IVec2> {
        match self.state {
            MiningState::Mining { target, .. } => Some(target),
            MiningState::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        self.state = MiningState::Idle;
    }

    /// Fraction of the current target's hardness already worked off.
    pub fn progress(&self, world: &World) -> f64 {
        match self.state {
            MiningState::Mining {
                target,
                elapsed_ticks,
            } => {
                let block = world.get_block(target.x, target.y);
                (self.work(elapsed_ticks) / required_work(&block)).min(1.0)
            }
            MiningState::Idle => 0.0,
        }
    }

    /// Advances the session by one step. Every step that starts or continues
    /// mining counts as one elapsed tick.
    pub fn update(
        &mut self,
        held: bool,
        target: IVec2,
        player_cell: IVec2,
        world: &mut World,
        inventory: &mut Inventory,
    ) -> Result<MiningOutcome, MiningError> {
        if !held {
            self.reset();
            return Ok(MiningOutcome::Idle);
        }

        let block = world.get_block(target.x, target.y);
        if block.is_air() || cell_distance(player_cell, target) > self.config.range {
            self.reset();
            return Ok(MiningOutcome::Idle);
        }

        let elapsed_ticks = match self.state {
            MiningState::Mining {
                target: current,
                elapsed_ticks,
            } if current == target => elapsed_ticks.saturating_add(1),
            _ => {
                debug!("Started mining {:?} at {}", block.kind, target);
                1
            }
        };

        if self.work(elapsed_ticks) < required_work(&block) {
            self.state = MiningState::Mining {
                target,
                elapsed_ticks,
            };
            return Ok(MiningOutcome::Progress {
                target,
                fraction: self.work(elapsed_ticks) / required_work(&block),
            });
        }

        self.reset();
        world.set_block(target.x, target.y, Block::AIR)?;

        let grant = inventory.add_block(block.kind);
        if let Err(e) = grant {
            warn!("Broke {:?} at {} but {}", block.kind, target, e);
        } else {
            debug!("Broke {:?} at {} after {} ticks", block.kind, target, elapsed_ticks);
        }

        Ok(MiningOutcome::Broken {
            target,
            kind: block.kind,
            grant,
        })
    }

    fn work(&self, elapsed_ticks: u32) -> f64 {
        elapsed_ticks as f64 * self.config.tick_increment * self.config.speed
    }
}

fn required_work(block: &Block) -> f64 {
    block.hardness.max(1) as f64
}
