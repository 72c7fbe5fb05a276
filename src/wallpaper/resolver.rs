use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use super::catalog::{dimension_for, effective_region, ordered_resolutions};
use super::models::{ArchiveImage, ArchiveQuery, Cover, ResolvedInfo, WallpaperQuery};

/// Images requested per archive query
pub const IMAGES_PER_QUERY: u32 = 1;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
/// `%#z` also takes a bare `Z`
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

/// Parses a caller-supplied date.
///
/// Accepts RFC 3339, RFC 2822, `YYYY-MM-DDTHH:MM[:SS]` with or without an
/// offset, `YYYY-MM-DD`, `YYYYMMDD`, `YYYY/MM/DD`, `YYYY-MM` and `YYYY`.
/// Values without an offset are UTC; date-only values are midnight, and a
/// missing month or day is the first one.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, ResolveError> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(raw, format) {
            return Ok(parsed.with_timezone(&Utc));
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed.and_utc());
        }
    }

    // Year-month and bare year start on the first day
    let padded = [raw.to_string(), format!("{raw}-01"), format!("{raw}-01-01")];
    for candidate in &padded {
        for format in DATE_FORMATS {
            let midnight = NaiveDate::parse_from_str(candidate, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0));
            if let Some(midnight) = midnight {
                return Ok(midnight.and_utc());
            }
        }
    }

    Err(ResolveError::InvalidDate(raw.to_string()))
}

/// Whole days between `now` and `date`, ignoring direction.
///
/// The archive indexes by "days before today", so a future date maps to the
/// same index as the past date equally far away.
pub fn day_offset(date: Option<&str>, now: DateTime<Utc>) -> Result<i64, ResolveError> {
    let Some(raw) = date else {
        return Ok(0);
    };

    let parsed = parse_date(raw)?;
    Ok((now - parsed).num_days().abs())
}

/// Builds the archive query for an inbound request.
pub fn archive_query(
    query: &WallpaperQuery,
    now: DateTime<Utc>,
) -> Result<ArchiveQuery, ResolveError> {
    Ok(ArchiveQuery {
        idx: day_offset(query.date(), now)?,
        n: IMAGES_PER_QUERY,
        mkt: effective_region(query.region()).to_string(),
    })
}

/// `YYYYMMDD` -> `YYYY-MM-DD`. Short input yields short segments rather than an error.
pub fn format_archive_date(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let slice = |start: usize, end: usize| -> String {
        let end = end.min(chars.len());
        let start = start.min(end);
        chars[start..end].iter().collect()
    };

    format!(
        "{}-{}-{}",
        slice(0, 4),
        slice(4, 6),
        slice(6, chars.len())
    )
}

/// Resolved info plus the image URL that image mode would stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub info: ResolvedInfo,
    pub image_url: String,
}

/// Expands the archive descriptor into the cover table and applies `dpi` selection.
///
/// An unknown `dpi` is ignored and the first cover stays primary.
pub fn resolve(
    image: &ArchiveImage,
    dpi: Option<&str>,
    host: &str,
    default_dimension: &str,
) -> Resolution {
    let cover: Vec<Cover> = ordered_resolutions(default_dimension)
        .into_iter()
        .map(|(label, dimension)| Cover {
            dpi: label.to_string(),
            url: format!("{}{}_{}.jpg", host, image.urlbase, dimension),
        })
        .collect();

    let mut image_url = cover.first().map(|c| c.url.clone()).unwrap_or_default();

    let selected_cover = dpi
        .filter(|label| dimension_for(label).is_some())
        .and_then(|label| cover.iter().find(|c| c.dpi == label))
        .cloned();

    if let Some(ref selected) = selected_cover {
        image_url = selected.url.clone();
    }

    Resolution {
        info: ResolvedInfo {
            startdate: format_archive_date(&image.startdate),
            enddate: format_archive_date(&image.enddate),
            title: image.title.clone(),
            copyright: image.copyright.clone(),
            cover,
            selected_cover,
        },
        image_url,
    }
}
