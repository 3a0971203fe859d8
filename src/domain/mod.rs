//! Domain layer containing the health check model and probe registry.
//!
//! # Architecture
//!
//! - [`entities`] - Health check result types and their wire format
//! - [`probe`] - The [`probe::Probe`] capability every check implements
//! - [`registry`] - Ordered, shared collection of registered probes
//!
//! # Check Flow
//!
//! 1. Components register probes via [`registry::HealthRegistry::add_check`]
//! 2. An HTTP request reaches [`crate::api::handlers::health_handler`]
//! 3. [`registry::HealthRegistry::run_checks`] invokes every probe in order
//! 4. Results are partitioned into healthy and unhealthy sets and serialized

pub mod entities;
pub mod probe;
pub mod registry;
