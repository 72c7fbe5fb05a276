use super::models::Config;
use crate::wallpaper::catalog;
use reqwest::Url;
use thiserror::Error;

/// Longest cache lifetime accepted for image responses
const MAX_CACHE_AGE_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Route prefix '{0}' must start with '/'")]
    InvalidRoutePrefix(String),

    #[error("cache_max_age ({actual}s) exceeds limit of one year ({limit}s)")]
    CacheAgeExceedsLimit { actual: u64, limit: u64 },

    #[error("Invalid upstream base_url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Upstream archive_path '{0}' must start with '/'")]
    InvalidArchivePath(String),

    #[error("Timeout must be positive: {field}")]
    ZeroTimeout { field: String },

    #[error("Default dimension '{0}' does not appear in the resolution table")]
    UnknownDefaultDimension(String),
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_server(config)?;
    validate_upstream(config)?;
    validate_resolver(config)?;
    Ok(())
}

fn validate_server(config: &Config) -> Result<(), ValidationError> {
    if let Some(ref prefix) = config.server.route_prefix {
        if !prefix.starts_with('/') {
            return Err(ValidationError::InvalidRoutePrefix(prefix.clone()));
        }
    }

    if config.server.cache_max_age.as_secs() > MAX_CACHE_AGE_SECS {
        return Err(ValidationError::CacheAgeExceedsLimit {
            actual: config.server.cache_max_age.as_secs(),
            limit: MAX_CACHE_AGE_SECS,
        });
    }

    Ok(())
}

/// Base URL must be absolute http(s); the image host is derived from it
fn validate_upstream(config: &Config) -> Result<(), ValidationError> {
    let upstream = &config.upstream;

    let url = Url::parse(&upstream.base_url).map_err(|e| ValidationError::InvalidBaseUrl {
        url: upstream.base_url.clone(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ValidationError::InvalidBaseUrl {
            url: upstream.base_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if !upstream.archive_path.starts_with('/') {
        return Err(ValidationError::InvalidArchivePath(
            upstream.archive_path.clone(),
        ));
    }

    if upstream.connect_timeout.as_secs() == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "connect_timeout".to_string(),
        });
    }

    if upstream.request_timeout.as_secs() == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "request_timeout".to_string(),
        });
    }

    Ok(())
}

fn validate_resolver(config: &Config) -> Result<(), ValidationError> {
    if !catalog::has_dimension(&config.resolver.default_dimension) {
        return Err(ValidationError::UnknownDefaultDimension(
            config.resolver.default_dimension.clone(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::humanize::Seconds;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_route_prefix_must_be_absolute() {
        let mut config = Config::default();
        config.server.route_prefix = Some("bing".to_string());
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidRoutePrefix(_))
        ));

        config.server.route_prefix = Some("/bing".to_string());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_cache_age_limit() {
        let mut config = Config::default();
        config.server.cache_max_age = Seconds(MAX_CACHE_AGE_SECS + 1);
        assert!(matches!(
            validate(&config),
            Err(ValidationError::CacheAgeExceedsLimit { .. })
        ));
    }

    #[test]
    fn test_base_url_must_be_http() {
        let mut config = Config::default();
        config.upstream.base_url = "ftp://www.bing.com".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));

        config.upstream.base_url = "www.bing.com".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_archive_path_must_be_absolute() {
        let mut config = Config::default();
        config.upstream.archive_path = "HPImageArchive.aspx".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidArchivePath(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.upstream.request_timeout = Seconds(0);
        assert!(matches!(
            validate(&config),
            Err(ValidationError::ZeroTimeout { ref field }) if field == "request_timeout"
        ));
    }

    #[test]
    fn test_unknown_default_dimension() {
        let mut config = Config::default();
        config.resolver.default_dimension = "3840x2160".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::UnknownDefaultDimension(_))
        ));

        config.resolver.default_dimension = "720x1280".to_string();
        assert!(validate(&config).is_ok());
    }
}
