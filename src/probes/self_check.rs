//! Liveness check of the service itself.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::entities::{CheckType, HealthCheckResponse};
use crate::domain::probe::Probe;

/// Always-healthy `SELF` check carrying build and uptime information.
///
/// ```json
/// {
///   "actionable": false,
///   "healthy": true,
///   "name": "healthcheck-aggregator",
///   "type": "SELF",
///   "additional_info": {
///     "started_at": "2026-10-19T08:00:00Z",
///     "uptime_seconds": 3600,
///     "version": "0.1.0"
///   }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SelfProbe {
    started_at: DateTime<Utc>,
}

impl SelfProbe {
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    pub fn started_at(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }

    fn uptime_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_seconds().max(0)
    }
}

impl Default for SelfProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe for SelfProbe {
    fn check(&self) -> HealthCheckResponse {
        HealthCheckResponse::healthy(env!("CARGO_PKG_NAME"), CheckType::SelfCheck)
            .with_info("version", env!("CARGO_PKG_VERSION"))
            .with_info(
                "started_at",
                self.started_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            )
            .with_info("uptime_seconds", self.uptime_seconds(Utc::now()))
    }
}
