//! Sensitive data scanning pipeline
//!
//! A scan fans one input out to every registered detector and folds the
//! outcomes into a single [`ScanResults`].
//!
//! # Architecture
//!
//! - **Detector**: a candidate pattern, a per-candidate validator and optional
//!   context keywords for one [`SensitiveDataType`] ([`PatternDetector`])
//! - **Registry**: the fixed, ordered set of detectors ([`DetectorRegistry`])
//! - **Service**: runs every detector, isolates failures, drops empty
//!   results ([`ScanService`])
//!
//! # Usage
//!
//! ```rust
//! use dlp_engine::scanner::{DetectorRegistry, ScanService, SensitiveDataType};
//! use std::sync::Arc;
//!
//! # fn example() -> dlp_engine::domain::Result<()> {
//! let service = ScanService::new(Arc::new(DetectorRegistry::builtin()?));
//! let results = service.scan("My social security number is 123-45-6789");
//!
//! let ssn = results.result_for(SensitiveDataType::Ssn).unwrap();
//! assert_eq!((ssn.count, ssn.context_rank), (1, 1));
//! # Ok(())
//! # }
//! ```

pub mod detector;
pub mod models;
pub mod patterns;
pub mod registry;
pub mod service;
pub mod validator;

use crate::domain::DetectorError;

// Re-export main types
pub use detector::{PatternDetector, PatternDetectorBuilder};
pub use models::{CategoryResult, ScanResults, SensitiveDataType};
pub use registry::DetectorRegistry;
pub use service::ScanService;
pub use validator::MatchValidator;

/// Trait for sensitive data detectors
///
/// A detector scans one input and reports a single category-scoped result.
/// Implementations must hold no per-call state; the same instance serves
/// concurrent scans.
pub trait SensitiveDataDetector: Send + Sync {
    /// Display name, used to key errors in [`ScanResults`]
    fn name(&self) -> &str;

    /// Category this detector reports on
    fn data_type(&self) -> SensitiveDataType;

    /// Scan the input
    ///
    /// # Errors
    ///
    /// Any error is recovered by the scan service and recorded under
    /// [`name`](Self::name).
    fn scan(&self, input: &str) -> Result<CategoryResult, DetectorError>;
}
