//! Probe capability implemented by every registered health check.

use crate::domain::entities::HealthCheckResponse;

/// A zero-argument health check.
///
/// Implemented for any `Fn() -> HealthCheckResponse` closure, so probes can be
/// registered as closures, function items, or dedicated types
/// (see [`crate::probes`]).
///
/// Probes run synchronously inside the request that asked for them. Nothing
/// bounds their running time: a probe that blocks holds its request open.
#[cfg_attr(test, mockall::automock)]
pub trait Probe: Send + Sync {
    /// Runs the check and reports its result.
    fn check(&self) -> HealthCheckResponse;
}

impl<F> Probe for F
where
    F: Fn() -> HealthCheckResponse + Send + Sync,
{
    fn check(&self) -> HealthCheckResponse {
        self()
    }
}
