//! Configuration schema types
//!
//! This module defines the configuration structure for the DLP engine.
//! Every section and field has a default, so an empty file is a valid
//! configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main DLP engine configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlpConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input limits enforced by the request layer
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DlpConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.limits.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Input limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum inline text length, in characters
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,

    /// Maximum file size for file scans, in bytes (0 = unlimited)
    #[serde(default = "default_max_file_size_bytes")]
    pub max_file_size_bytes: u64,

    /// Deadline for reading a file, in milliseconds (0 = none)
    #[serde(default = "default_file_read_timeout_ms")]
    pub file_read_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_length: default_max_input_length(),
            max_file_size_bytes: default_max_file_size_bytes(),
            file_read_timeout_ms: default_file_read_timeout_ms(),
        }
    }
}

impl LimitsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_input_length == 0 {
            return Err("limits.max_input_length must be > 0".to_string());
        }
        Ok(())
    }

    /// File size cap, if enabled
    pub fn max_file_size(&self) -> Option<u64> {
        (self.max_file_size_bytes > 0).then_some(self.max_file_size_bytes)
    }

    /// File read deadline, if enabled
    pub fn file_read_timeout(&self) -> Option<Duration> {
        (self.file_read_timeout_ms > 0).then(|| Duration::from_millis(self.file_read_timeout_ms))
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging (JSON lines)
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_input_length() -> usize {
    4000
}

fn default_max_file_size_bytes() -> u64 {
    1024 * 1024
}

fn default_file_read_timeout_ms() -> u64 {
    5000
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
