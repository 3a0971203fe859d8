//! HTTP request handlers for API endpoints.

pub mod health;

pub use health::health_handler;
