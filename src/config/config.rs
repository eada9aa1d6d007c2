use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{API_TOKEN_ENV, API_VERSION_ENV, CONFIG_FILE};
use crate::error::{MondayError, MondayResult};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_token: Option<String>,
    pub api_version: Option<String>,
    pub default_board_id: Option<String>,
}

pub fn config_path() -> MondayResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE))
        .ok_or_else(|| MondayError::ConfigError("Could not find home directory".to_string()))
}

pub fn load_config() -> MondayResult<Config> {
    load_config_from(&config_path()?)
}

/// A missing file yields the default config.
pub fn load_config_from(path: &Path) -> MondayResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str)
        .map_err(|e| MondayError::ConfigError(format!("Invalid config file {}: {}", path.display(), e)))
}

pub fn save_config(config: &Config) -> MondayResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> MondayResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// Environment variable first, then the config file.
pub fn resolve_api_token(env_token: Option<String>, config: &Config) -> Option<String> {
    env_token
        .filter(|token| !token.trim().is_empty())
        .or_else(|| config.api_token.clone())
}

pub fn get_api_token() -> MondayResult<String> {
    let config = load_config().unwrap_or_default();
    resolve_api_token(env::var(API_TOKEN_ENV).ok(), &config).ok_or(MondayError::ApiKeyNotFound)
}

pub fn get_api_version() -> Option<String> {
    env::var(API_VERSION_ENV)
        .ok()
        .or_else(|| load_config().ok().and_then(|config| config.api_version))
}
