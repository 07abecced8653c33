//! Configuration management for rugwatch
//!
//! Loads configuration from TOML/YAML files and environment variables.
//! Environment variables override file values.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_REDIS_URL;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Redis trade feed configuration
    #[serde(default)]
    pub redis: RedisConfig,
}

/// Redis trade feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    /// Connection URL of the instance the trade ingestor writes to
    #[serde(default = "default_redis_url")]
    pub url: String,
}

fn default_redis_url() -> String {
    DEFAULT_REDIS_URL.to_string()
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (RUGWATCH_*)
    /// 2. config/config.{toml,yaml} (if exists)
    /// 3. config.{toml,yaml} (if exists)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("redis.url", DEFAULT_REDIS_URL)?
            // Load from config files (lower priority)
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config/config").required(false))
            // Override with environment variables (highest priority - loaded last)
            // RUGWATCH_REDIS__URL=redis://10.0.0.5 -> redis.url
            .add_source(
                Environment::with_prefix("RUGWATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.redis.url.is_empty() {
            return Err(ConfigError::Message(
                "Redis URL must be set via RUGWATCH_REDIS__URL".to_string(),
            ));
        }

        Ok(())
    }
}
