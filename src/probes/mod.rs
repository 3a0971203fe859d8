//! Built-in probes registered by the server.
//!
//! - [`SelfProbe`] - Reports the service itself as alive, with version and uptime
//! - [`TcpProbe`] - Checks that an upstream service accepts TCP connections
//!
//! Any `Fn() -> HealthCheckResponse` closure is a probe as well; these types
//! exist for the checks the service configures on its own.

pub mod self_check;
pub mod tcp;

pub use self_check::SelfProbe;
pub use tcp::TcpProbe;

use crate::config::Config;
use crate::domain::registry::HealthRegistry;

/// Registers the self check followed by one [`TcpProbe`] per configured
/// dependency, in configuration order.
pub fn register_builtin(registry: &HealthRegistry, config: &Config) {
    registry.add_check(SelfProbe::new());

    for dependency in &config.tcp_dependencies {
        registry.add_check(TcpProbe::new(
            dependency.name.clone(),
            dependency.address.clone(),
            config.tcp_timeout(),
        ));
    }

    tracing::info!(probes = registry.len(), "Built-in health checks registered");
}
