//! Scan service
//!
//! This module provides the [`ScanService`] that fans an input out to every
//! registered detector and folds the outcomes into one [`ScanResults`].
//!
//! # Failure isolation
//!
//! Each detector runs behind its own boundary. A detector that returns an
//! error, or panics, is recorded in `errors` under its display name and the
//! remaining detectors still run. Results with a zero count are dropped even
//! when their context rank is positive.
//!
//! # Examples
//!
//! ```no_run
//! use dlp_engine::scanner::{DetectorRegistry, ScanService};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = ScanService::new(Arc::new(DetectorRegistry::builtin()?))
//!     .with_max_file_size(1024 * 1024)
//!     .with_file_read_timeout(Duration::from_secs(5));
//!
//! let results = service.scan_file("/var/data/export.txt").await?;
//! println!("{}", serde_json::to_string(&results)?);
//! # Ok(())
//! # }
//! ```

use super::models::{CategoryResult, ScanResults};
use super::registry::DetectorRegistry;
use super::SensitiveDataDetector;
use crate::domain::{DetectorError, FileReadError};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Aggregates every registered detector over one input
///
/// # Thread Safety
///
/// The service holds only the shared, immutable registry and its limits, so
/// it can be cloned or wrapped in `Arc` and used from many tasks at once.
#[derive(Debug, Clone)]
pub struct ScanService {
    registry: Arc<DetectorRegistry>,
    max_file_size: Option<u64>,
    file_read_timeout: Option<Duration>,
}

impl ScanService {
    /// Create a scan service over a registry, with no file limits
    pub fn new(registry: Arc<DetectorRegistry>) -> Self {
        Self {
            registry,
            max_file_size: None,
            file_read_timeout: None,
        }
    }

    /// Refuse to read files larger than `bytes`
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = Some(bytes);
        self
    }

    /// Abandon file reads that take longer than `timeout`
    pub fn with_file_read_timeout(mut self, timeout: Duration) -> Self {
        self.file_read_timeout = Some(timeout);
        self
    }

    /// Registry this service scans with
    pub fn registry(&self) -> &DetectorRegistry {
        &self.registry
    }

    /// Scan text with every registered detector
    ///
    /// Never fails: detector failures are reported in the `errors` field.
    pub fn scan(&self, input: &str) -> ScanResults {
        let mut scan_results = ScanResults::default();

        for detector in self.registry.iter() {
            match run_isolated(detector.as_ref(), input) {
                Ok(result) if result.has_findings() => {
                    tracing::debug!(
                        detector = detector.name(),
                        category = detector.data_type().tag(),
                        count = result.count,
                        context_rank = result.context_rank,
                        "Detector reported findings"
                    );
                    scan_results.results.push(result);
                }
                Ok(result) => {
                    tracing::trace!(
                        detector = detector.name(),
                        context_rank = result.context_rank,
                        "Detector found no valid matches"
                    );
                }
                Err(e) => {
                    // Messages may come from arbitrary detector code; input is never logged
                    tracing::error!(
                        detector = detector.name(),
                        error = %e,
                        "Caught error from detector while scanning input"
                    );
                    scan_results
                        .errors
                        .insert(detector.name().to_string(), e.to_string());
                }
            }
        }

        tracing::debug!(
            input_len = input.len(),
            categories = scan_results.results.len(),
            errors = scan_results.errors.len(),
            "Scan completed"
        );

        scan_results
    }

    /// Read a UTF-8 file and scan its contents
    ///
    /// Applies the configured size cap and read timeout, if any. Dropping the
    /// returned future abandons the read.
    ///
    /// # Errors
    ///
    /// Returns a [`FileReadError`] if the file cannot be read; no detector
    /// runs in that case.
    pub async fn scan_file(&self, path: impl AsRef<Path>) -> Result<ScanResults, FileReadError> {
        let path = path.as_ref();
        let input = self.read_input(path, self.file_read_timeout).await?;
        Ok(self.scan(&input))
    }

    /// Like [`scan_file`](Self::scan_file), with a per-call read deadline
    /// that replaces the configured timeout
    pub async fn scan_file_with_deadline(
        &self,
        path: impl AsRef<Path>,
        deadline: Duration,
    ) -> Result<ScanResults, FileReadError> {
        let input = self.read_input(path.as_ref(), Some(deadline)).await?;
        Ok(self.scan(&input))
    }

    async fn read_input(
        &self,
        path: &Path,
        timeout: Option<Duration>,
    ) -> Result<String, FileReadError> {
        let outcome = match timeout {
            Some(limit) => tokio::time::timeout(limit, self.read_to_string(path))
                .await
                .map_err(|_| FileReadError::TimedOut {
                    path: path.to_path_buf(),
                    timeout_ms: limit.as_millis(),
                })?,
            None => self.read_to_string(path).await,
        };

        if let Err(ref e) = outcome {
            tracing::error!(path = %path.display(), error = %e, "Failed to read file for scanning");
        }
        outcome
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, FileReadError> {
        if let Some(limit) = self.max_file_size {
            let metadata = tokio::fs::metadata(path)
                .await
                .map_err(|e| FileReadError::from_io(path, e))?;
            if metadata.len() > limit {
                return Err(FileReadError::TooLarge {
                    path: path.to_path_buf(),
                    size: metadata.len(),
                    limit,
                });
            }
        }

        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FileReadError::from_io(path, e))
    }
}

/// Run one detector, turning a panic into a [`DetectorError`]
fn run_isolated(
    detector: &dyn SensitiveDataDetector,
    input: &str,
) -> Result<CategoryResult, DetectorError> {
    match panic::catch_unwind(AssertUnwindSafe(|| detector.scan(input))) {
        Ok(outcome) => outcome,
        Err(payload) => Err(DetectorError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "detector panicked".to_string()
    }
}
