//! Reachability check of an upstream service over TCP.

use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

use crate::domain::entities::{CheckType, HealthCheckResponse, Severity};
use crate::domain::probe::Probe;

/// `EXTERNAL_DEPENDENCY` check that succeeds when `address` accepts a TCP
/// connection within `timeout`.
///
/// Every resolved socket address is tried in turn, each with the full
/// timeout. Name resolution itself is not bounded.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    name: String,
    address: String,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(name: impl Into<String>, address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            timeout,
        }
    }

    fn connect(&self) -> io::Result<()> {
        let mut last_error = None;

        for addr in self.address.to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(_) => return Ok(()),
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} did not resolve to any address", self.address),
            )
        }))
    }
}

impl Probe for TcpProbe {
    fn check(&self) -> HealthCheckResponse {
        let started = Instant::now();
        let outcome = self.connect();
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let response = match outcome {
            Ok(()) => HealthCheckResponse::healthy(&self.name, CheckType::ExternalDependency),
            Err(e) => {
                tracing::debug!(check = %self.name, address = %self.address, error = %e, "TCP connect failed");
                HealthCheckResponse::unhealthy(&self.name, CheckType::ExternalDependency)
                    .with_severity(Severity::Down)
                    .with_message(format!("Cannot connect to {}: {}", self.address, e))
            }
        };

        response
            .with_actionable(true)
            .with_dependency(&self.name)
            .with_info("address", self.address.as_str())
            .with_info("latency_ms", elapsed_ms)
    }
}
