//! Scan request body and routes

use serde::{Deserialize, Serialize};

/// Body of a scan request
///
/// Deserialized from camelCase JSON: `{"text": "..."}` or
/// `{"filePath": "..."}`. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    /// Inline text to scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Path of a file on the host to scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl ScanRequest {
    /// Create a request from optional text and file path
    pub fn new(text: Option<&str>, file_path: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
            file_path: file_path.map(str::to_string),
        }
    }

    /// Create a text scan request
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            file_path: None,
        }
    }

    /// Create a file scan request
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            text: None,
            file_path: Some(path.into()),
        }
    }

    /// Text, if present and not blank
    pub fn text_value(&self) -> Option<&str> {
        non_blank(self.text.as_deref())
    }

    /// File path, if present and not blank
    pub fn file_path_value(&self) -> Option<&str> {
        non_blank(self.file_path.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Scan routes under `/api/v1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanEndpoint {
    /// `/api/v1/scan`, text or file
    Scan,
    /// `/api/v1/scan/text`
    Text,
    /// `/api/v1/scan/file`
    File,
}

impl ScanEndpoint {
    /// All routes
    pub const ALL: [ScanEndpoint; 3] = [Self::Scan, Self::Text, Self::File];

    /// Route path
    pub fn path(&self) -> &'static str {
        match self {
            Self::Scan => "/api/v1/scan",
            Self::Text => "/api/v1/scan/text",
            Self::File => "/api/v1/scan/file",
        }
    }

    /// Resolve a route path; a single trailing slash is tolerated
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.strip_suffix('/').unwrap_or(path);
        Self::ALL.into_iter().find(|e| e.path() == path)
    }
}
