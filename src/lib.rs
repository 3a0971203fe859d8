//! # Health Check Aggregator
//!
//! A minimal health-check aggregator exposed over HTTP, built with Axum.
//!
//! Components register zero-argument probes with a shared
//! [`HealthRegistry`]. On every `GET` of the health endpoint all probes run,
//! in registration order, and their results are split into `healthy` and
//! `unhealthy` lists. The endpoint answers `200 OK` when nothing is
//! unhealthy and `500 Internal Server Error` otherwise.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Health check model, probe trait and registry
//! - **API Layer** ([`api`]) - Handler, response DTOs, route registration and middleware
//! - **Probes** ([`probes`]) - Built-in self and TCP dependency checks
//!
//! ## Embedding
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use axum::Router;
//! use healthcheck_aggregator::prelude::*;
//!
//! let registry = Arc::new(HealthRegistry::new());
//! registry.add_check(|| {
//!     HealthCheckResponse::healthy("Sample Check", CheckType::SelfCheck).with_actionable(true)
//! });
//!
//! let app = create_health_check(Router::new(), "/healthcheck").with_state(registry);
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export HEALTH_TCP_DEPENDENCIES="postgres=localhost:5432"
//! cargo run
//! curl -i http://localhost:3000/healthcheck
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod probes;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use domain::registry::HealthRegistry;
pub use error::HealthError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::health::CollectedResponse;
    pub use crate::api::routes::create_health_check;
    pub use crate::domain::entities::{CheckType, Dependency, HealthCheckResponse, Severity};
    pub use crate::domain::probe::Probe;
    pub use crate::domain::registry::HealthRegistry;
    pub use crate::state::AppState;
}
