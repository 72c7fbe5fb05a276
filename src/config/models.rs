use crate::humanize::Seconds;
use crate::wallpaper::DEFAULT_DIMENSION;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Server configuration.
///
/// The deployment knobs (`cache_max_age`, `emit_cors_header`, `route_prefix`)
/// cover both hosting variants without separate code paths.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// `Cache-Control: public, max-age=<n>` on image responses
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age: Seconds,
    /// Adds `Access-Control-Allow-Origin: *` to info responses
    #[serde(default)]
    pub emit_cors_header: bool,
    /// When set, paths not starting with this prefix get a plain 404
    #[serde(default)]
    pub route_prefix: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cache_max_age: default_cache_max_age(),
            emit_cors_header: false,
            route_prefix: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_cache_max_age() -> Seconds {
    Seconds(86400) // 24 hours
}

/// Archive endpoint and outbound client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_archive_path")]
    pub archive_path: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Seconds,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Seconds,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            archive_path: default_archive_path(),
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.bing.com".to_string()
}

fn default_archive_path() -> String {
    "/HPImageArchive.aspx".to_string()
}

fn default_connect_timeout() -> Seconds {
    Seconds(10)
}

fn default_request_timeout() -> Seconds {
    Seconds(60)
}

fn default_user_agent() -> String {
    format!("dailywall/{}", env!("CARGO_PKG_VERSION"))
}

/// Resolution table settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Dimension whose entries lead the cover table and serve as the default image
    #[serde(default = "default_dimension")]
    pub default_dimension: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_dimension: default_dimension(),
        }
    }
}

fn default_dimension() -> String {
    DEFAULT_DIMENSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.server.cache_max_age.as_secs(), 86400);
        assert!(!config.server.emit_cors_header);
        assert!(config.server.route_prefix.is_none());
        assert_eq!(config.upstream.base_url, "https://www.bing.com");
        assert_eq!(config.upstream.archive_path, "/HPImageArchive.aspx");
        assert_eq!(config.resolver.default_dimension, "1920x1080");
    }

    #[test]
    fn test_pages_variant_from_toml() {
        let config: Config = toml::from_str(
            r#"
[server]
cache_max_age = "1h"
emit_cors_header = true
route_prefix = "/bing"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.cache_max_age.as_secs(), 3600);
        assert!(config.server.emit_cors_header);
        assert_eq!(config.server.route_prefix.as_deref(), Some("/bing"));
        assert_eq!(config.upstream.request_timeout.as_secs(), 60);
    }
}
