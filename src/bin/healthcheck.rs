//! One-shot health check runner.
//!
//! Runs the configured probes once, without starting the HTTP server, and
//! reports the result. Exits with status 0 when every check is healthy and
//! 1 otherwise, which makes it usable as a container `HEALTHCHECK`.
//!
//! # Usage
//!
//! ```bash
//! # Human-readable report
//! cargo run --bin healthcheck
//!
//! # Same JSON body the HTTP endpoint returns
//! cargo run --bin healthcheck -- --json
//!
//! # Only the exit status
//! cargo run --bin healthcheck -- --quiet
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see
//! [`healthcheck_aggregator::config`]), including `.env` files.

use healthcheck_aggregator::api::dto::health::CollectedResponse;
use healthcheck_aggregator::config;
use healthcheck_aggregator::domain::entities::HealthCheckResponse;
use healthcheck_aggregator::probes;
use healthcheck_aggregator::HealthRegistry;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process::ExitCode;

/// Runs all configured health checks once.
#[derive(Parser)]
#[command(name = "healthcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the report as JSON instead of a table
    #[arg(long, conflicts_with = "quiet")]
    json: bool,

    /// Print nothing; report through the exit status only
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let registry = HealthRegistry::new();
    probes::register_builtin(&registry, &config);

    let report = CollectedResponse::partition(registry.run_checks());

    if cli.json {
        let body = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{body}");
    } else if !cli.quiet {
        print_report(&report);
    }

    Ok(if report.is_healthy() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints one line per check, unhealthy checks first.
fn print_report(report: &CollectedResponse) {
    for check in &report.unhealthy {
        print_check(check);
    }
    for check in &report.healthy {
        print_check(check);
    }

    println!();
    let summary = format!(
        "{} healthy, {} unhealthy",
        report.healthy.len(),
        report.unhealthy.len()
    );
    if report.is_healthy() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red().bold());
    }
}

fn print_check(check: &HealthCheckResponse) {
    let status = if check.healthy {
        " OK ".green().bold()
    } else {
        "FAIL".red().bold()
    };

    let check_type = serde_json::to_value(check.check_type)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default();

    println!("[{}] {} {}", status, check.name.bold(), check_type.dimmed());

    if let Some(severity) = check.severity {
        println!("       severity: {}", format!("{severity:?}").to_uppercase().yellow());
    }
    if let Some(message) = &check.message {
        println!("       {}", message);
    }
    if let Some(service) = &check.dependency.name {
        println!("       depends on: {}", service);
    }
    if let Some(link) = &check.link {
        println!("       see: {}", link.underline());
    }
}
