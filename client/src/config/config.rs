use common::config::Validate;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, GameConfig, YamlConfigSerializer};

pub const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    /// Fixed seed for the AI's random source; a fresh seed per game when unset.
    pub rng_seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        Ok(())
    }
}
