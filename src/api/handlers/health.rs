//! Handler for health check endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::dto::health::CollectedResponse;
use crate::domain::registry::HealthRegistry;
use crate::error::HealthError;

/// Runs every registered probe and reports the aggregate result.
///
/// # Endpoint
///
/// `GET <health path>` (default `/healthcheck`)
///
/// # Response Codes
///
/// - **200 OK**: No probe reported itself unhealthy
/// - **500 Internal Server Error**: One or more probes unhealthy, or the
///   report could not be serialized (empty body)
///
/// # Response
///
/// ```json
/// {
///   "healthy": [
///     { "actionable": true, "healthy": true, "name": "Sample Check", "type": "SELF" }
///   ],
///   "unhealthy": []
/// }
/// ```
///
/// Probes run one after another on the request task. A probe that blocks
/// delays the response and one that panics aborts it.
pub async fn health_handler(State(registry): State<Arc<HealthRegistry>>) -> Response {
    let report = CollectedResponse::partition(registry.run_checks());

    for check in &report.unhealthy {
        tracing::warn!(
            check = %check.name,
            severity = ?check.severity,
            reason = check.message.as_deref().unwrap_or(""),
            "Health check failed"
        );
        metrics::counter!("healthcheck_probe_failures_total", "check" => check.name.clone())
            .increment(1);
    }

    tracing::debug!(
        healthy = report.healthy.len(),
        unhealthy = report.unhealthy.len(),
        "Health checks completed"
    );

    let response =
        respond(&report, report.is_healthy()).unwrap_or_else(IntoResponse::into_response);

    metrics::counter!(
        "healthcheck_requests_total",
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);

    response
}

/// Serializes `body` as JSON, answering 200 only when `healthy` is set.
fn respond<T: Serialize>(body: &T, healthy: bool) -> Result<Response, HealthError> {
    let bytes = serde_json::to_vec(body)?;

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
