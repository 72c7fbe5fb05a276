//! Response bodies owned by the transport layer.
//!
//! The wallpaper payload itself is [`crate::wallpaper::ResolvedInfo`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
