//! Wallpaper resolution: maps request parameters onto the daily-image archive
//! and expands the archive's URL base into per-resolution image URLs.

pub mod catalog;
pub mod models;
mod resolver;

pub use catalog::{DEFAULT_DIMENSION, DEFAULT_REGION, REGIONS, RESOLUTIONS};
pub use models::{
    ArchiveImage, ArchiveQuery, ArchiveResponse, Cover, OutputMode, ResolvedInfo, WallpaperQuery,
};
pub use resolver::{
    IMAGES_PER_QUERY, Resolution, ResolveError, archive_query, day_offset, format_archive_date,
    parse_date, resolve,
};
