//! Health check result types.
//!
//! # Entity Types
//!
//! - [`HealthCheckResponse`] - Result of one probe invocation
//! - [`CheckType`] - Category of the checked signal
//! - [`Severity`] - Escalation level of an unhealthy result
//! - [`Dependency`] - Upstream service a check depends on

pub mod health_check;

pub use health_check::{CheckType, Dependency, HealthCheckResponse, Severity};
