#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use healthcheck_aggregator::prelude::*;
use std::sync::Arc;

pub const HEALTH_PATH: &str = "/healthcheck";

/// Serves the health endpoint for `registry` at [`HEALTH_PATH`].
pub fn create_test_server(registry: Arc<HealthRegistry>) -> TestServer {
    let app: Router = create_health_check(Router::new(), HEALTH_PATH).with_state(registry);
    TestServer::new(app).unwrap()
}

pub fn sample_check() -> HealthCheckResponse {
    HealthCheckResponse::healthy("Sample Check", CheckType::SelfCheck).with_actionable(true)
}

pub fn failing_check() -> HealthCheckResponse {
    HealthCheckResponse::unhealthy("Failing Check", CheckType::SelfCheck)
}

pub fn fully_populated_check() -> HealthCheckResponse {
    HealthCheckResponse::unhealthy("Failing Check", CheckType::SelfCheck)
        .with_severity(Severity::Critical)
        .with_message("Something has gone really wrong!")
        .with_dependency("Upstream")
        .with_info("foo", "bar")
        .with_link("https://www.wolframalpha.com/input/?i=why+are+firetrucks+red%3F")
}
