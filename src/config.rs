//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `HEALTH_PATH` - Path of the health endpoint (default: `/healthcheck`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HEALTH_TCP_DEPENDENCIES` - Upstream services probed over TCP, as a
//!   comma-separated list of `name=host:port` entries (default: none)
//! - `HEALTH_TCP_TIMEOUT_MS` - Connect timeout of each TCP probe in
//!   milliseconds (default: 2000, max: 60000)
//!
//! ```bash
//! export HEALTH_PATH="/healthcheck"
//! export HEALTH_TCP_DEPENDENCIES="postgres=db.internal:5432,redis=cache.internal:6379"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// An upstream service checked by opening a TCP connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpDependency {
    pub name: String,
    /// `host:port` to connect to.
    pub address: String,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub health_path: String,
    pub log_level: String,
    pub log_format: String,
    pub tcp_dependencies: Vec<TcpDependency>,
    /// Connect timeout applied by each TCP dependency probe.
    pub tcp_timeout_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `HEALTH_TCP_DEPENDENCIES` is malformed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let health_path = env::var("HEALTH_PATH").unwrap_or_else(|_| "/healthcheck".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let tcp_dependencies = match env::var("HEALTH_TCP_DEPENDENCIES") {
            Ok(raw) => parse_tcp_dependencies(&raw)
                .context("Failed to parse HEALTH_TCP_DEPENDENCIES")?,
            Err(_) => Vec::new(),
        };

        let tcp_timeout_ms = env::var("HEALTH_TCP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2000);

        Ok(Self {
            listen_addr,
            health_path,
            log_level,
            log_format,
            tcp_dependencies,
            tcp_timeout_ms,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `health_path` does not start with `/`
    /// - `tcp_timeout_ms` is outside `1..=60000`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.health_path.starts_with('/') {
            anyhow::bail!(
                "HEALTH_PATH must start with '/', got '{}'",
                self.health_path
            );
        }

        if self.tcp_timeout_ms == 0 || self.tcp_timeout_ms > 60_000 {
            anyhow::bail!(
                "HEALTH_TCP_TIMEOUT_MS must be between 1 and 60000, got {}",
                self.tcp_timeout_ms
            );
        }

        Ok(())
    }

    pub fn tcp_timeout(&self) -> Duration {
        Duration::from_millis(self.tcp_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Health path: {}", self.health_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.tcp_dependencies.is_empty() {
            tracing::info!("  TCP dependencies: none");
        } else {
            for dependency in &self.tcp_dependencies {
                tracing::info!(
                    "  TCP dependency: {} ({}, timeout {}ms)",
                    dependency.name,
                    dependency.address,
                    self.tcp_timeout_ms
                );
            }
        }
    }
}

/// Parses a comma-separated list of `name=host:port` entries.
///
/// Blank entries are skipped, so trailing commas are accepted.
///
/// # Errors
///
/// Returns an error for an entry without `=`, with an empty name, or whose
/// address has no port.
pub fn parse_tcp_dependencies(raw: &str) -> Result<Vec<TcpDependency>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<TcpDependency> {
            let (name, address) = entry
                .split_once('=')
                .with_context(|| format!("expected 'name=host:port', got '{entry}'"))?;
            let (name, address) = (name.trim(), address.trim());

            if name.is_empty() {
                anyhow::bail!("dependency name must not be empty in '{entry}'");
            }

            let has_port = address
                .rsplit_once(':')
                .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
            if !has_port {
                anyhow::bail!("address of '{name}' must be 'host:port', got '{address}'");
            }

            Ok(TcpDependency {
                name: name.to_string(),
                address: address.to_string(),
            })
        })
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            health_path: "/healthcheck".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            tcp_dependencies: Vec::new(),
            tcp_timeout_ms: 2000,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.health_path = "healthcheck".to_string();
        assert!(config.validate().is_err());

        config.health_path = "/status/health".to_string();
        assert!(config.validate().is_ok());

        config.tcp_timeout_ms = 0;
        assert!(config.validate().is_err());

        config.tcp_timeout_ms = 60_001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_tcp_dependencies() {
        let deps =
            parse_tcp_dependencies("postgres=db.internal:5432, redis = cache:6379,").unwrap();

        assert_eq!(
            deps,
            vec![
                TcpDependency {
                    name: "postgres".to_string(),
                    address: "db.internal:5432".to_string(),
                },
                TcpDependency {
                    name: "redis".to_string(),
                    address: "cache:6379".to_string(),
                },
            ]
        );

        assert!(parse_tcp_dependencies("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tcp_dependencies_rejects_malformed_entries() {
        assert!(parse_tcp_dependencies("db.internal:5432").is_err());
        assert!(parse_tcp_dependencies("=db.internal:5432").is_err());
        assert!(parse_tcp_dependencies("postgres=db.internal").is_err());
        assert!(parse_tcp_dependencies("postgres=db.internal:http").is_err());
        assert!(parse_tcp_dependencies("postgres=:5432").is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("HEALTH_PATH");
            env::remove_var("LOG_FORMAT");
            env::remove_var("HEALTH_TCP_DEPENDENCIES");
            env::remove_var("HEALTH_TCP_TIMEOUT_MS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.health_path, "/healthcheck");
        assert_eq!(config.log_format, "text");
        assert!(config.tcp_dependencies.is_empty());
        assert_eq!(config.tcp_timeout(), Duration::from_secs(2));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_dependencies() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("HEALTH_TCP_DEPENDENCIES", "upstream=127.0.0.1:8080");
            env::set_var("HEALTH_TCP_TIMEOUT_MS", "250");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.tcp_dependencies.len(), 1);
        assert_eq!(config.tcp_dependencies[0].name, "upstream");
        assert_eq!(config.tcp_timeout_ms, 250);

        // Malformed list is a load error
        unsafe {
            env::set_var("HEALTH_TCP_DEPENDENCIES", "upstream");
        }
        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("HEALTH_TCP_DEPENDENCIES");
            env::remove_var("HEALTH_TCP_TIMEOUT_MS");
        }
    }
}
