//! Health check route registration.

use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};

use crate::api::handlers::health_handler;
use crate::domain::registry::HealthRegistry;

/// Identifier of the health check route, reported in logs.
pub const HEALTH_CHECK_ROUTE: &str = "HealthCheck";

/// Binds `GET path` on `router` to [`health_handler`].
///
/// Works with any router state the registry can be extracted from, so the
/// endpoint can be mounted into an existing application:
///
/// ```rust,ignore
/// let registry = Arc::new(HealthRegistry::new());
/// let app = create_health_check(Router::new(), "/healthcheck").with_state(registry);
/// ```
///
/// Other methods on `path` are answered with `405 Method Not Allowed`.
///
/// # Panics
///
/// Panics if `path` does not start with `/` or is already routed on `router`.
pub fn create_health_check<S>(router: Router<S>, path: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Arc<HealthRegistry>: FromRef<S>,
{
    tracing::debug!(route = HEALTH_CHECK_ROUTE, path, "Registering health check route");
    router.route(path, get(health_handler))
}
