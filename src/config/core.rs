use crate::config::gameplay::GameplayConfig;
use crate::config::worldgen::WorldGenConfig;
use crate::player::inventory::{INVENTORY_SLOTS, MAX_STACK};
use crate::utils::error::{ConfigError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub worldgen: WorldGenConfig,
    pub gameplay: GameplayConfig,
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reads `path`, or writes the defaults there first if it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let config = Self::default();
            fs::write(path, config.to_toml_string()?)?;
            info!("Wrote default config to {}", path.display());
            return Ok(config);
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        let gameplay = &self.gameplay;
        let worldgen = &self.worldgen;

        if gameplay.block_size <= 0.0 {
            return Err(ConfigError::Invalid("block_size must be positive".into()));
        }
        if gameplay.player_width <= 0.0 || gameplay.player_height <= 0.0 {
            return Err(ConfigError::Invalid("player size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&gameplay.physics.friction) {
            return Err(ConfigError::Invalid("friction must lie in [0, 1]".into()));
        }
        if gameplay.physics.terminal_velocity >= gameplay.block_size {
            return Err(ConfigError::Invalid(
                "terminal_velocity must stay below one block per step".into(),
            ));
        }
        if gameplay.mining.tick_increment <= 0.0 || gameplay.mining.speed <= 0.0 {
            return Err(ConfigError::Invalid(
                "mining tick_increment and speed must be positive".into(),
            ));
        }
        if gameplay.starting_inventory.len() > INVENTORY_SLOTS {
            return Err(ConfigError::Invalid(format!(
                "starting_inventory has {} stacks, only {} slots exist",
                gameplay.starting_inventory.len(),
                INVENTORY_SLOTS
            )));
        }
        if let Some(stack) = gameplay
            .starting_inventory
            .iter()
            .find(|stack| stack.count > MAX_STACK || stack.kind.is_air())
        {
            return Err(ConfigError::Invalid(format!(
                "invalid starting stack {:?} x{}",
                stack.kind, stack.count
            )));
        }
        worldgen.validate()?;
        Ok(())
    }
}
