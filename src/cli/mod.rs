//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the DLP engine using clap.

pub mod commands;

use crate::api::ScanApi;
use crate::config::LimitsConfig;
use crate::scanner::{DetectorRegistry, ScanService};
use clap::{Parser, Subcommand};
use std::sync::Arc;

/// DLP Engine - detect Social Security Numbers and IBANs in text and files
#[derive(Parser, Debug)]
#[command(name = "dlp-engine")]
#[command(version, about, long_about = None)]
#[command(author = "DLP Engine Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, env = "DLP_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DLP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan inline text or a file and print the results as JSON
    Scan(commands::scan::ScanArgs),

    /// Execute a raw JSON request against one of the scan routes
    Request(commands::request::RequestArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Whether the command scans and therefore needs a loaded configuration
    pub fn needs_config(&self) -> bool {
        matches!(self, Self::Scan(_) | Self::Request(_))
    }
}

/// Build the request layer with the built-in detectors and `limits`
pub fn build_scan_api(limits: &LimitsConfig) -> anyhow::Result<ScanApi> {
    let registry = DetectorRegistry::builtin()?;
    tracing::debug!(detectors = ?registry.names(), "Detector registry built");
    let service = ScanService::new(Arc::new(registry));
    Ok(ScanApi::from_limits(service, limits))
}

/// Map a request status code to a process exit code
///
/// 2xx -> 0, 404 -> 3, other 4xx -> 2, anything else -> 5
pub fn exit_code_for_status(status: u16) -> i32 {
    match status {
        200..=299 => 0,
        404 => 3,
        400..=499 => 2,
        _ => 5,
    }
}
