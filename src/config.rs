//! # Configuration
//!
//! [`CartConfig`] is assembled by `figment` from three layers, later layers
//! winning:
//!
//! 1. Built-in defaults.
//! 2. An optional TOML file.
//! 3. Environment variables prefixed with `CART_` (`CART_STORAGE_KEY`,
//!    `CART_BUFFER_SIZE`, `CART_DATA_DIR`).
//!
//! ```toml
//! storage_key = "@RocketShoes:cart"
//! buffer_size = 32
//! data_dir = "/var/lib/rocketshoes"
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage key the cart is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Extract(#[from] figment::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key of the persisted cart in the storage backend.
    pub storage_key: String,
    /// Capacity of each actor's request channel.
    pub buffer_size: usize,
    /// Directory for [`FileStore`](crate::services::FileStore). `None` keeps the cart in memory.
    pub data_dir: Option<PathBuf>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            buffer_size: 32,
            data_dir: None,
        }
    }
}

impl CartConfig {
    /// Loads defaults, then `path` if given, then `CART_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(CartConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config: CartConfig = figment.merge(Env::prefixed("CART_")).extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid("buffer_size must be at least 1".into()));
        }
        Ok(())
    }
}
