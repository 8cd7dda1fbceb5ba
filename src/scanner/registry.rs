//! Ordered, read-only set of active detectors

use super::patterns::{iban_detector, ssn_detector};
use super::SensitiveDataDetector;
use crate::domain::Result;
use std::sync::Arc;

/// Fixed, ordered collection of detectors
///
/// Built once at startup and shared by every scan. Iteration order is
/// insertion order and decides the order of results in responses.
#[derive(Clone)]
pub struct DetectorRegistry {
    detectors: Vec<Arc<dyn SensitiveDataDetector>>,
}

impl DetectorRegistry {
    /// Create a registry with the built-in detectors: SSN, then IBAN
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn builtin() -> Result<Self> {
        let ssn = Arc::new(ssn_detector()?);
        let iban = Arc::new(iban_detector()?);
        Ok(Self::from_detectors(vec![ssn, iban]))
    }

    /// Create a registry from an explicit, ordered set of detectors
    pub fn from_detectors(detectors: Vec<Arc<dyn SensitiveDataDetector>>) -> Self {
        Self { detectors }
    }

    /// Iterate detectors in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn SensitiveDataDetector>> {
        self.detectors.iter()
    }

    /// Display names in registry order
    pub fn names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Number of registered detectors
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Check if no detectors are registered
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl std::fmt::Debug for DetectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorRegistry")
            .field("detectors", &self.names())
            .finish()
    }
}
