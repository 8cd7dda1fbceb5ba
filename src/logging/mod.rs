//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr
//! - JSON-formatted, rotating log files
//! - Configurable log levels
//!
//! Scanned text and matched values are never logged.
//!
//! # Example
//!
//! ```no_run
//! use dlp_engine::logging::init_logging;
//! use dlp_engine::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard, LOG_FILE_NAME};
