//! Configuration management for ScrollLedger

use crate::block::DIGEST_HEX_LEN;
use crate::error::{LedgerError, Result};
use crate::ledger::GENESIS_MARKER;
use crate::registry::DEFAULT_HOUSE_OWNER;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_difficulty")]
    pub difficulty: usize,
    #[serde(default = "default_genesis_marker")]
    pub genesis_marker: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            genesis_marker: default_genesis_marker(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_house_owner")]
    pub house_owner: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            house_owner: default_house_owner(),
        }
    }
}

pub fn load_config() -> Result<Config> {
    load_config_from("config.toml")
}

pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config_str = fs::read_to_string(path).unwrap_or_default();
    let config: Config = if config_str.is_empty() {
        // Sane defaults when config.toml is absent
        Config {
            ledger: LedgerConfig::default(),
            registry: RegistryConfig::default(),
        }
    } else {
        toml::from_str(&config_str)?
    };

    // Validate critical values
    if config.ledger.difficulty > DIGEST_HEX_LEN {
        return Err(LedgerError::ConfigError(format!(
            "ledger.difficulty must be at most {}",
            DIGEST_HEX_LEN
        )));
    }

    if config.ledger.genesis_marker.is_empty() {
        return Err(LedgerError::ConfigError(
            "ledger.genesis_marker must not be empty".to_string(),
        ));
    }

    if config.registry.house_owner.is_empty() {
        return Err(LedgerError::ConfigError(
            "registry.house_owner must not be empty".to_string(),
        ));
    }

    Ok(config)
}

fn default_difficulty() -> usize {
    2
}

fn default_genesis_marker() -> String {
    GENESIS_MARKER.to_string()
}

fn default_house_owner() -> String {
    DEFAULT_HOUSE_OWNER.to_string()
}
