//! API utility functions
//!
//! Pure, stateless helpers for request routing and response headers.

use crate::humanize::Seconds;

/// Whether `path` passes the optional route-prefix guard.
///
/// Plain string prefix match: `/bing` also admits `/bingo`.
pub fn path_allowed(path: &str, prefix: Option<&str>) -> bool {
    match prefix {
        Some(prefix) => path.starts_with(prefix),
        None => true,
    }
}

/// `Cache-Control` value for image responses
pub fn cache_control(max_age: Seconds) -> String {
    format!("public, max-age={}", max_age.as_secs())
}

/// First value for each parameter name, like `URLSearchParams.get`
pub fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}
