//! Configuration management for dailywall
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use dailywall::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `DAILYWALL__<section>__<key>`
//!
//! Examples:
//! - `DAILYWALL__SERVER__BIND_ADDR=0.0.0.0:9000`
//! - `DAILYWALL__SERVER__CACHE_MAX_AGE=1h`
//! - `DAILYWALL__SERVER__ROUTE_PREFIX=/bing`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/dailywall.toml`.
//! This can be overridden using the `DAILYWALL_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use crate::humanize::Seconds;
pub use models::{Config, ResolverConfig, ServerConfig, UpstreamConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
