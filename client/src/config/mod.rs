mod config;
mod game_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{CONFIG_FILE_NAME, Config, get_config_manager};
pub use game_config::GameConfig;
