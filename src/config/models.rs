//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use crate::catalog::DEFAULT_STORAGE_KEY;
use crate::error::{Result, ShowcaseError, StringError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Secret typed to reveal the add/remove panel unless configured otherwise
pub const DEFAULT_SECRET: &str = "unbound";

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Key the catalog is persisted under
    pub storage_key: String,
    /// Secret sequence that reveals the gated panel
    pub secret: String,
    /// Directory for the catalog store; the config directory when unset
    pub data_dir: Option<PathBuf>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            secret: DEFAULT_SECRET.to_string(),
            data_dir: None,
        }
    }
}

impl ShowcaseConfig {
    /// Reject values the rest of the application cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.secret.is_empty() {
            return Err(ShowcaseError::Config(StringError::new(
                "secret must not be empty",
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ShowcaseError::Config(StringError::new(
                "storage_key must not be empty",
            )));
        }
        Ok(())
    }
}
