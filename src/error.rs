//! Errors surfaced by the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failure while producing a health report.
///
/// Probe results are never errors: an unhealthy probe is reported data.
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("failed to serialize health report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for HealthError {
    /// Answers `500 Internal Server Error` with an empty body.
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Health report could not be produced");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
