// DLP Engine - Social Security Number and IBAN scanner
// Copyright (c) 2025 DLP Engine Contributors
// Licensed under the MIT License

//! # DLP Engine
//!
//! A data-loss-prevention scanner that inspects free text or UTF-8 files for
//! U.S. Social Security Numbers and International Bank Account Numbers.
//!
//! ## Overview
//!
//! For each category the engine reports:
//! - **count**: how many validated occurrences were found
//! - **contextRank**: how many category-specific keywords appear in the input
//!
//! Categories with no validated occurrences are omitted. A detector that
//! fails is reported by name in an `errors` map while the others still run.
//!
//! ## Architecture
//!
//! - [`scanner`] - Detectors, registry and the aggregating scan service
//! - [`api`] - Request validation and status mapping for the scan routes
//! - [`cli`] - Command-line interface and argument parsing
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dlp_engine::scanner::{DetectorRegistry, ScanService};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(DetectorRegistry::builtin()?);
//! let service = ScanService::new(registry);
//!
//! let results = service.scan("SSN 123-45-6789, IBAN GB29 NWBK 6016 1331 9268 19");
//! println!("{}", serde_json::to_string(&results)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scanning files
//!
//! ```rust,no_run
//! use dlp_engine::scanner::{DetectorRegistry, ScanService};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ScanService::new(Arc::new(DetectorRegistry::builtin()?))
//!     .with_max_file_size(1024 * 1024)
//!     .with_file_read_timeout(Duration::from_secs(5));
//!
//! let results = service.scan_file("statement.txt").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The engine logs with `tracing`. Scanned text and matched values are never
//! logged; only detector names, counts and ranks are.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod scanner;
