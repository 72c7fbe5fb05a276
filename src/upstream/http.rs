//! reqwest-backed archive client

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use tracing::{debug, warn};

use super::{ImageBody, Result, UpstreamError, WallpaperSource};
use crate::config::UpstreamConfig;
use crate::wallpaper::{ArchiveImage, ArchiveQuery, ArchiveResponse};

/// Payload variant requested from the archive
const ARCHIVE_FORMAT: &str = "js";

pub struct HttpSource {
    client: Client,
    host: String,
    archive_url: Url,
}

impl HttpSource {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let host = config.base_url.trim_end_matches('/').to_string();
        let archive_url = Url::parse(&format!("{}{}", host, config.archive_path))
            .map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout.as_duration())
            .timeout(config.request_timeout.as_duration())
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| UpstreamError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            host,
            archive_url,
        })
    }

    async fn send_checked(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        Ok(response)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else if e.is_decode() {
        UpstreamError::InvalidPayload(e.to_string())
    } else {
        UpstreamError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl WallpaperSource for HttpSource {
    fn host(&self) -> &str {
        &self.host
    }

    async fn fetch_archive(&self, query: &ArchiveQuery) -> Result<ArchiveImage> {
        debug!(idx = query.idx, mkt = %query.mkt, "Querying archive");

        let request = self.client.get(self.archive_url.clone()).query(&[
            ("idx", query.idx.to_string()),
            ("n", query.n.to_string()),
            ("mkt", query.mkt.clone()),
            ("format", ARCHIVE_FORMAT.to_string()),
        ]);

        let payload: ArchiveResponse = self
            .send_checked(request)
            .await?
            .json()
            .await
            .map_err(map_reqwest_error)?;

        payload.images.into_iter().next().ok_or_else(|| {
            warn!(idx = query.idx, mkt = %query.mkt, "Archive returned no images");
            UpstreamError::NoImages
        })
    }

    async fn fetch_image(&self, url: &str) -> Result<ImageBody> {
        let url = Url::parse(url).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;
        debug!(%url, "Fetching image");

        let response = self.send_checked(self.client.get(url)).await?;
        Ok(ImageBody::from_stream(response.bytes_stream()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_trims_trailing_slash() {
        let config = UpstreamConfig {
            base_url: "https://www.bing.com/".to_string(),
            ..UpstreamConfig::default()
        };
        let source = HttpSource::new(&config).unwrap();
        assert_eq!(source.host(), "https://www.bing.com");
        assert_eq!(
            source.archive_url.as_str(),
            "https://www.bing.com/HPImageArchive.aspx"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = UpstreamConfig {
            base_url: "not a url".to_string(),
            ..UpstreamConfig::default()
        };
        assert!(matches!(
            HttpSource::new(&config),
            Err(UpstreamError::InvalidUrl(_))
        ));
    }
}
