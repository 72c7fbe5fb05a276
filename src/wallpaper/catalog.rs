//! Static lookup tables: market codes and resolution labels

/// Market codes accepted by the archive
pub const REGIONS: &[&str] = &[
    "zh-CN", "en-US", "ja-JP", "en-AU", "en-UK", "de-DE", "en-NZ", "en-CA",
];

/// Market used when the requested one is absent or unknown
pub const DEFAULT_REGION: &str = "en-US";

/// Dimension listed first in the cover table
pub const DEFAULT_DIMENSION: &str = "1920x1080";

/// Resolution label -> `WIDTHxHEIGHT`, in declared iteration order.
///
/// Several labels share a dimension. Numeric labels come first, matching the
/// iteration order clients have always observed.
pub const RESOLUTIONS: &[(&str, &str)] = &[
    ("720", "1280x720"),
    ("1080", "1920x1080"),
    ("720p", "1280x720"),
    ("1080p", "1920x1080"),
    ("1080i", "1920x1080"),
    ("hd", "1920x1080"),
    ("uhd", "1920x1080"),
    ("2k", "1920x1080"),
    ("2.5k", "1920x1200"),
    ("2.8k", "1920x1200"),
    ("4k", "1920x1080"),
    ("m", "720x1280"),
    ("small", "1280x720"),
    ("thumbnail", "320x240"),
    ("mobile", "720x1280"),
    ("original", "1920x1200"),
    ("1920x1200", "1920x1200"),
    ("1920x1080", "1920x1080"),
    ("1366x768", "1366x768"),
    ("1280x768", "1280x768"),
    ("1280x720", "1280x720"),
    ("1024x768", "1024x768"),
    ("800x600", "800x600"),
    ("800x480", "800x480"),
    ("768x1280", "768x1280"),
    ("720x1280", "720x1280"),
    ("640x480", "640x480"),
    ("480x800", "480x800"),
    ("400x240", "400x240"),
    ("320x240", "320x240"),
    ("240x320", "240x320"),
];

/// Returns the requested market if it is known, otherwise [`DEFAULT_REGION`].
pub fn effective_region(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|region| REGIONS.iter().copied().find(|known| *known == region))
        .unwrap_or(DEFAULT_REGION)
}

/// Looks up the dimension for a resolution label (exact, case-sensitive).
pub fn dimension_for(label: &str) -> Option<&'static str> {
    RESOLUTIONS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, dimension)| *dimension)
}

/// Whether any label maps to `dimension`
pub fn has_dimension(dimension: &str) -> bool {
    RESOLUTIONS.iter().any(|(_, known)| *known == dimension)
}

/// Resolution table with every `default_dimension` entry moved to the front.
///
/// The moved group comes out in reverse declared order (`1920x1080`, `4k`, ...,
/// `1080`), which is what clients of the public service see. The rest keep
/// their declared order.
pub fn ordered_resolutions(default_dimension: &str) -> Vec<(&'static str, &'static str)> {
    let (mut ordered, rest): (Vec<_>, Vec<_>) = RESOLUTIONS
        .iter()
        .copied()
        .partition(|(_, dimension)| *dimension == default_dimension);
    ordered.reverse();
    ordered.extend(rest);
    ordered
}
