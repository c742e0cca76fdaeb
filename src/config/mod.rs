//! Configuration management
//!
//! This module handles loading, validation, and defaults for the engine
//! configuration.

use crate::utils::error::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default storage key for the persisted session
pub const DEFAULT_SESSION_KEY: &str = "local-first-auth-user";
/// Default storage key for the persisted user registry
pub const DEFAULT_USERS_KEY: &str = "local-first-auth-users";
/// Default artificial delay for the simulated resource fetch
pub const DEFAULT_FETCH_DELAY_MS: u64 = 700;
/// Default minimum password length accepted at registration
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 4;

/// Main configuration struct for the engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration
    pub storage: StorageConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// Resource configuration
    pub resources: ResourceConfig,
}

/// Storage backend configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Snapshot file path; `None` keeps the store purely in memory
    pub path: Option<PathBuf>,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Storage key holding the session identity
    pub session_key: String,
    /// Storage key holding the user registry
    pub users_key: String,
    /// Minimum password length accepted at registration
    pub min_password_len: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
            users_key: DEFAULT_USERS_KEY.to_string(),
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

/// Resource configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Artificial delay for the simulated fetch, in milliseconds
    pub fetch_delay_ms: u64,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GateError::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| GateError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.session_key.trim().is_empty() {
            return Err(GateError::config("Session key must not be empty"));
        }
        if self.auth.users_key.trim().is_empty() {
            return Err(GateError::config("Users key must not be empty"));
        }
        if self.auth.session_key == self.auth.users_key {
            return Err(GateError::config(
                "Session key and users key must be distinct",
            ));
        }
        Ok(())
    }
}
