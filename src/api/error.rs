use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;
use tracing::warn;

use super::models::ErrorResponse;
use crate::upstream::UpstreamError;
use crate::wallpaper::ResolveError;

/// Request failures. Both kinds surface as `500 {"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Upstream(#[from] UpstreamError),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Upstream(_) => "upstream_failure",
            ApiError::Internal(_) => "unhandled_failure",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        warn!(kind = self.kind(), error = %self, "Request failed");

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ResolveError> for ApiError {
    fn from(value: ResolveError) -> Self {
        ApiError::Internal(value.to_string())
    }
}
