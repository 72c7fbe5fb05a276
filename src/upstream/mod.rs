//! Outbound side: the daily-image archive and its static image host

mod http;

pub use http::HttpSource;

use async_trait::async_trait;
use axum::body::Body;
use thiserror::Error;

use crate::wallpaper::{ArchiveImage, ArchiveQuery};

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Connection timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid archive payload: {0}")]
    InvalidPayload(String),

    #[error("Archive returned no images")]
    NoImages,
}

pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Image bytes as they arrive from the upstream host
pub type ImageBody = Body;

/// Source of archive descriptors and image bytes
#[async_trait]
pub trait WallpaperSource: Send + Sync {
    /// Host prefix prepended to an archive `urlbase`
    fn host(&self) -> &str;

    /// Fetch the first archive image for `query`
    async fn fetch_archive(&self, query: &ArchiveQuery) -> Result<ArchiveImage>;

    /// Fetch image bytes without buffering the whole body
    async fn fetch_image(&self, url: &str) -> Result<ImageBody>;
}
