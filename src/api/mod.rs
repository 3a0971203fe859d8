//! HTTP layer exposing the health check endpoint.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - Route registration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
