use crate::config::core::EngineConfig;
use crate::physics::{CollisionReport, PlayerPhysicsHandler};
use crate::player::{place_block, InputSnapshot, MiningOutcome, Placement, Player};
use crate::utils::error::{ConfigError, MiningError, PlacementError};
use crate::utils::math;
use crate::world::{SharedWorld, World};
use glam::{IVec2, Vec2};
use log::{debug, info, warn};
use parking_lot::RwLockReadGuard;

/// Everything one call to `Engine::step` did, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub tick: u64,
    /// Slot that became selected this step.
    pub selected_slot: Option<usize>,
    pub collision: CollisionReport,
    pub mining: Result<MiningOutcome, MiningError>,
    /// `None` unless placement was requested.
    pub placement: Option<Result<Placement, PlacementError>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningView {
    pub active: bool,
    pub target: Option<IVec2>,
    pub progress: f64,
}

/// Simulation context: the world, the player and the tuning they run under.
pub struct Engine {
    world: SharedWorld,
    player: Player,
    physics: PlayerPhysicsHandler,
    config: EngineConfig,
    tick: u64,
}

impl Engine {
    /// Generates the configured world and spawns the player on it. An unset
    /// world seed is drawn here and kept in `config()`.
    pub fn new(mut config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        config.worldgen.resolve_seed();
        let world = World::generate(&config.worldgen)?;
        Ok(Self::with_world(config, world))
    }

    /// Runs over an already built world. The player stands on the topmost
    /// solid cell of column 0, or at the top of the world if that column is
    /// empty.
    pub fn with_world(config: EngineConfig, world: World) -> Self {
        let gameplay = &config.gameplay;
        let block_size = gameplay.block_size;

        let surface = world.surface_y(0).unwrap_or_else(|| {
            let (top, _) = world.bounds().row_span();
            top
        });
        let spawn = Vec2::new(
            (block_size - gameplay.player_width) * 0.5,
            surface as f32 * block_size - gameplay.player_height,
        );
        info!("Spawning player at ({}, {})", spawn.x, spawn.y);

        let player = Player::new(spawn, gameplay);
        let physics = PlayerPhysicsHandler::new(gameplay.physics.clone(), block_size);

        Self {
            world: SharedWorld::new(world),
            player,
            physics,
            config,
            tick: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> RwLockReadGuard<'_, World> {
        self.world.read()
    }

    /// Handle for readers on other threads.
    pub fn shared_world(&self) -> SharedWorld {
        self.world.clone()
    }

    pub fn camera_offset(&self, viewport: Vec2) -> Vec2 {
        self.player.camera_offset(viewport)
    }

    /// Cell under a pointer at `screen`, for a view of size `viewport`
    /// following the player.
    pub fn target_cell(&self, screen: Vec2, viewport: Vec2) -> IVec2 {
        math::target_cell(
            screen,
            self.camera_offset(viewport),
            self.config.gameplay.block_size,
        )
    }

    pub fn mining_view(&self) -> MiningView {
        let mining = &self.player.mining;
        MiningView {
            active: mining.is_active(),
            target: mining.target(),
            progress: mining.progress(&self.world.read()),
        }
    }

    /// Runs one fixed step: slot selection, physics, mining, placement.
    pub fn step(&mut self, input: &InputSnapshot, target: IVec2) -> StepReport {
        self.tick += 1;
        let block_size = self.config.gameplay.block_size;

        let selected_slot = input
            .selected_slot
            .filter(|&slot| self.player.inventory.select(slot));
        if let Some(slot) = selected_slot {
            debug!("Selected slot {}", slot);
        }

        let mut world = self.world.write();

        let collision = self.physics.step(&mut self.player.body, input, &world);

        let player_cell = self.player.block_cell(block_size);
        let mining = self.player.mining.update(
            input.mine_held,
            target,
            player_cell,
            &mut world,
            &mut self.player.inventory,
        );
        if let Err(e) = &mining {
            warn!("Mining at {} failed: {}", target, e);
        }

        let placement = if input.place_pressed {
            let slot = self.player.inventory.selected();
            let result = place_block(&mut world, &mut self.player.inventory, target, slot);
            if let Err(e) = &result {
                debug!("Placement at {} rejected: {}", target, e);
            }
            Some(result)
        } else {
            None
        };

        StepReport {
            tick: self.tick,
            selected_slot,
            collision,
            mining,
            placement,
        }
    }
}
