//! Domain error types
//!
//! This module defines the error hierarchy for the DLP engine.
//! All errors are domain-specific and don't expose third-party types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main DLP engine error type
///
/// Returned while loading configuration and building detectors. Detector
/// failures are absent: they are recovered by the scan service and reported
/// inside [`ScanResults`](crate::scanner::ScanResults). File scans fail with
/// [`FileReadError`].
#[derive(Debug, Error)]
pub enum DlpError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A detector pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),
}

/// Failure inside a single detector
///
/// The scan service records these in the `errors` map keyed by the
/// detector's display name; the `Display` output is the message that lands
/// in that map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectorError {
    /// The validator asked for a capture group that did not participate in the match
    #[error("capture group {group} did not participate in the match")]
    MissingCaptureGroup { group: usize },

    /// Generic detector failure
    #[error("{0}")]
    Failed(String),

    /// The detector panicked while scanning
    #[error("{0}")]
    Panicked(String),
}

impl DetectorError {
    /// Creates a generic detector failure
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Failure to read the input file of a file scan
///
/// Messages name the path but never the file contents.
#[derive(Debug, Error)]
pub enum FileReadError {
    /// Nothing exists at the path
    #[error("File not found at path {}", .path.display())]
    NotFound { path: PathBuf },

    /// The process may not read the file
    #[error("Permission denied reading file at path {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The file is not UTF-8 text
    #[error("File at path {} is not valid UTF-8 text", .path.display())]
    InvalidUtf8 { path: PathBuf },

    /// The file exceeds the configured size cap
    #[error("File at path {} is {size} bytes, exceeding the {limit} byte limit", .path.display())]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// The read did not finish before the deadline
    #[error("Timed out reading file at path {} after {timeout_ms}ms", .path.display())]
    TimedOut { path: PathBuf, timeout_ms: u128 },

    /// Any other I/O failure
    #[error("Failed to read file at path {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl FileReadError {
    /// Classifies an I/O error raised while reading `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => Self::InvalidUtf8 { path },
            _ => Self::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    /// Path the failed read targeted
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::InvalidUtf8 { path }
            | Self::TooLarge { path, .. }
            | Self::TimedOut { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DlpError {
    fn from(err: toml::de::Error) -> Self {
        DlpError::Configuration(format!("Failed to parse TOML: {err}"))
    }
}
