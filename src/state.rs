//! Shared application state.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::domain::registry::HealthRegistry;

/// State shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Arc<HealthRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<HealthRegistry>) -> Self {
        Self { registry }
    }
}

impl FromRef<AppState> for Arc<HealthRegistry> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.registry)
    }
}
