//! Wallpaper data model: request parameters, archive payload and resolved output.
//!
//! The archive answers `GET /HPImageArchive.aspx?idx=0&n=1&mkt=en-US&format=js` with:
//!
//! ```json
//! {
//!   "images": [
//!     {
//!       "startdate": "20240101",
//!       "enddate": "20240102",
//!       "urlbase": "/th?id=OHR.Example_EN-US1234567890",
//!       "copyright": "Example (© Someone)",
//!       "title": "Example title"
//!     }
//!   ]
//! }
//! ```
//!
//! which is reshaped into a [`ResolvedInfo`] carrying one [`Cover`] per resolution label.

use serde::{Deserialize, Serialize};

/// Inbound query parameters. All optional; empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WallpaperQuery {
    pub region: Option<String>,
    pub date: Option<String>,
    pub dpi: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl WallpaperQuery {
    pub fn region(&self) -> Option<&str> {
        non_empty(&self.region)
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn dpi(&self) -> Option<&str> {
        non_empty(&self.dpi)
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_type(non_empty(&self.kind))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// What the caller gets back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Info,
    Image,
}

impl OutputMode {
    /// Only the literal `"image"` selects image output.
    pub fn from_type(kind: Option<&str>) -> Self {
        match kind {
            Some("image") => OutputMode::Image,
            _ => OutputMode::Info,
        }
    }
}

/// Upstream archive query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveQuery {
    /// Days before today
    pub idx: i64,
    /// Number of images
    pub n: u32,
    /// Market code
    pub mkt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveResponse {
    #[serde(default)]
    pub images: Vec<ArchiveImage>,
}

/// One day's image as described by the archive
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArchiveImage {
    pub startdate: String,
    pub enddate: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub copyright: String,
    pub urlbase: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Cover {
    pub dpi: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolvedInfo {
    pub startdate: String,
    pub enddate: String,
    pub title: String,
    pub copyright: String,
    pub cover: Vec<Cover>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_cover: Option<Cover>,
}
