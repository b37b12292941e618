//! Configuration manager for loading and saving application configuration
//!
//! This module provides functionality to load and save configuration to
//! %APPDATA%\Showcase\config.json with atomic writes to prevent corruption.

use crate::config::models::ShowcaseConfig;
use crate::error::{Result, ShowcaseError, StringError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the application data directory
    ///
    /// Returns: %APPDATA%\Showcase (or .\Showcase when APPDATA is unset)
    pub fn get_data_dir() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("Showcase")
    }

    /// Get the path to the configuration file
    ///
    /// Returns: %APPDATA%\Showcase\config.json
    pub fn get_config_path() -> PathBuf {
        Self::get_data_dir().join("config.json")
    }

    /// Directory the catalog store should use for `config`
    pub fn storage_dir(config: &ShowcaseConfig) -> PathBuf {
        config.data_dir.clone().unwrap_or_else(Self::get_data_dir)
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist, is corrupt or holds invalid
    /// values, returns default configuration.
    pub fn load() -> Result<ShowcaseConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<ShowcaseConfig> {
        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(ShowcaseConfig::default());
        }

        let json = match std::fs::read_to_string(config_path) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to read configuration, using defaults: {}", e);
                return Ok(ShowcaseConfig::default());
            }
        };

        let config: ShowcaseConfig = match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                return Ok(ShowcaseConfig::default());
            }
        };

        if let Err(e) = config.validate() {
            warn!("Invalid configuration, using defaults: {}", e);
            return Ok(ShowcaseConfig::default());
        }

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration, writing the defaults out when no file exists yet
    ///
    /// A failed write is logged; the loaded configuration is returned either way.
    pub fn load_or_create() -> Result<ShowcaseConfig> {
        let config_path = Self::get_config_path();
        let existed = config_path.exists();
        let config = Self::load_from(&config_path)?;

        if !existed && let Err(e) = Self::save_to(&config, &config_path) {
            warn!("Failed to write default configuration: {}", e);
        }
        Ok(config)
    }

    /// Save configuration to disk with atomic write
    pub fn save(config: &ShowcaseConfig) -> Result<()> {
        Self::save_to(config, &Self::get_config_path())
    }

    /// Save configuration to an explicit path with atomic write
    ///
    /// Uses a temporary file in the same directory and renames it over the target.
    pub fn save_to(config: &ShowcaseConfig, config_path: &Path) -> Result<()> {
        config.validate()?;

        let config_dir = config_path
            .parent()
            .ok_or_else(|| ShowcaseError::Config(StringError::new("Invalid config path")))?;
        std::fs::create_dir_all(config_dir)?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = NamedTempFile::new_in(config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(config_path).map_err(|e| ShowcaseError::Io(e.error))?;

        info!("Configuration saved successfully");
        Ok(())
    }
}
