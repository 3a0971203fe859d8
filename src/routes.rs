//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  <health path>` - Aggregated health report (default `/healthcheck`)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::middleware::tracing;
use crate::api::routes::create_health_check;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `health_path` - path the health report is served on; must start with `/`
pub fn app_router(state: AppState, health_path: &str) -> NormalizePath<Router> {
    let router = create_health_check(Router::<AppState>::new(), health_path)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
