//! Configuration management for the DLP engine.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `DLP_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dlp_engine::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("dlp.toml")?;
//! println!("Max input length: {}", config.limits.max_input_length);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`LimitsConfig`] - Input limits for text and file scans
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [limits]
//! max_input_length = 4000
//! max_file_size_bytes = 1048576
//! file_read_timeout_ms = 5000
//!
//! [logging]
//! local_enabled = true
//! local_path = "${DLP_LOG_DIR}"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, DlpConfig, LimitsConfig, LoggingConfig};
