//! Scan result data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Category of sensitive data a detector looks for
///
/// Serialized as the human-readable display name, which is what clients see
/// in the `type` field of each result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SensitiveDataType {
    /// United States Social Security Number
    #[serde(rename = "Social Security Number")]
    Ssn,
    /// International Bank Account Number
    #[serde(rename = "IBAN Bank Account Code")]
    Iban,
}

impl SensitiveDataType {
    /// Get human-readable display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ssn => "Social Security Number",
            Self::Iban => "IBAN Bank Account Code",
        }
    }

    /// Short tag used in log fields
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Ssn => "SSN",
            Self::Iban => "IBAN",
        }
    }
}

impl fmt::Display for SensitiveDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Outcome of one detector over one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    /// Category the detector reports on
    #[serde(rename = "type")]
    pub data_type: SensitiveDataType,
    /// Number of validated matches
    pub count: usize,
    /// Number of context keyword occurrences anywhere in the input
    pub context_rank: usize,
}

impl CategoryResult {
    /// Create a new category result
    pub fn new(data_type: SensitiveDataType, count: usize, context_rank: usize) -> Self {
        Self {
            data_type,
            count,
            context_rank,
        }
    }

    /// Check if the detector found at least one valid instance
    pub fn has_findings(&self) -> bool {
        self.count > 0
    }
}

/// Composite result of running every registered detector over one input
///
/// `results` holds only categories with `count >= 1`, in registry order.
/// `errors` maps a failed detector's display name to its error message.
/// Empty fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResults {
    /// Per-category findings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<CategoryResult>,
    /// Detector display name to error message
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl ScanResults {
    /// Check if the scan produced neither findings nor errors
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.errors.is_empty()
    }

    /// Check if any detector failed
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the result for a category, if it was surfaced
    pub fn result_for(&self, data_type: SensitiveDataType) -> Option<&CategoryResult> {
        self.results.iter().find(|r| r.data_type == data_type)
    }

    /// Total validated matches across all categories
    pub fn total_count(&self) -> usize {
        self.results.iter().map(|r| r.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_result_wire_shape() {
        let result = CategoryResult::new(SensitiveDataType::Ssn, 2, 1);
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(
            value,
            json!({"type": "Social Security Number", "count": 2, "contextRank": 1})
        );
    }

    #[test]
    fn test_empty_scan_results_serialize_to_empty_object() {
        let value = serde_json::to_value(ScanResults::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_errors_only_omits_results() {
        let mut results = ScanResults::default();
        results
            .errors
            .insert("IBAN scanner".to_string(), "OOPS!".to_string());

        assert!(results.has_errors());
        assert!(!results.is_empty());
        assert_eq!(results.total_count(), 0);

        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value, json!({"errors": {"IBAN scanner": "OOPS!"}}));
    }

    #[test]
    fn test_scan_results_deserialize_with_missing_fields() {
        let parsed: ScanResults = serde_json::from_str(
            r#"{"results":[{"type":"IBAN Bank Account Code","count":4,"contextRank":0}]}"#,
        )
        .unwrap();
        assert!(parsed.errors.is_empty());
        assert_eq!(
            parsed.result_for(SensitiveDataType::Iban),
            Some(&CategoryResult::new(SensitiveDataType::Iban, 4, 0))
        );
        assert_eq!(parsed.total_count(), 4);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SensitiveDataType::Ssn.to_string(), "Social Security Number");
        let iban = SensitiveDataType::Iban;
        assert_eq!(iban.to_string(), "IBAN Bank Account Code");
        assert_eq!(iban.tag(), "IBAN");
    }
}
