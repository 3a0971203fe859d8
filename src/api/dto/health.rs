//! DTOs for health check endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::HealthCheckResponse;

/// Probe results of one request, split by their `healthy` flag.
///
/// Each result lands in exactly one of the two lists; within a list the
/// probes keep their invocation order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CollectedResponse {
    pub healthy: Vec<HealthCheckResponse>,
    pub unhealthy: Vec<HealthCheckResponse>,
}

impl CollectedResponse {
    /// Partitions results by their `healthy` flag, preserving order.
    pub fn partition<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = HealthCheckResponse>,
    {
        let (healthy, unhealthy) = responses.into_iter().partition(|r| r.healthy);
        Self { healthy, unhealthy }
    }

    /// Returns true if no probe reported itself unhealthy.
    pub fn is_healthy(&self) -> bool {
        self.unhealthy.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CheckType;
    use serde_json::json;

    fn names(responses: &[HealthCheckResponse]) -> Vec<&str> {
        responses.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_partition_by_healthy_flag_keeps_order() {
        let collected = CollectedResponse::partition(vec![
            HealthCheckResponse::healthy("a", CheckType::SelfCheck),
            HealthCheckResponse::unhealthy("b", CheckType::Metrics),
            HealthCheckResponse::healthy("c", CheckType::Infrastructure),
            HealthCheckResponse::unhealthy("d", CheckType::ExternalDependency),
        ]);

        assert_eq!(names(&collected.healthy), vec!["a", "c"]);
        assert_eq!(names(&collected.unhealthy), vec!["b", "d"]);
        assert!(!collected.is_healthy());
    }

    #[test]
    fn test_empty_partition_is_healthy() {
        let collected = CollectedResponse::partition(Vec::new());

        assert!(collected.is_healthy());
        assert_eq!(
            serde_json::to_value(&collected).unwrap(),
            json!({ "healthy": [], "unhealthy": [] })
        );
    }
}
