use super::models::Config;
use config::{ConfigError, Environment, File};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "DAILYWALL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/dailywall.toml";
const ENV_PREFIX: &str = "DAILYWALL";
const ENV_SEPARATOR: &str = "__";

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let config_path = env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    load_from_sources(config_path)
}

/// Load configuration from a specific path and environment
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    // DAILYWALL__SERVER__CACHE_MAX_AGE -> server.cache_max_age
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_only() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = load_from_sources(config_path).unwrap();
        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.server.cache_max_age.as_secs(), 86400);
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[server]
bind_addr = "127.0.0.1:9000"
cache_max_age = 3600
emit_cors_header = true
route_prefix = "/bing"

[upstream]
base_url = "http://127.0.0.1:9999"
request_timeout = "30s"
user_agent = "test-agent"

[resolver]
default_dimension = "1920x1200"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = load_from_sources(config_path).unwrap();
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.server.cache_max_age.as_secs(), 3600);
        assert!(config.server.emit_cors_header);
        assert_eq!(config.server.route_prefix.as_deref(), Some("/bing"));
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.upstream.request_timeout.as_secs(), 30);
        assert_eq!(config.upstream.connect_timeout.as_secs(), 10);
        assert_eq!(config.upstream.user_agent, "test-agent");
        assert_eq!(config.resolver.default_dimension, "1920x1200");
    }
}
