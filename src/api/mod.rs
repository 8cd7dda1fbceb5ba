//! Request layer for the scan endpoints
//!
//! This module validates scan requests and maps outcomes to HTTP status
//! codes without binding to any particular server. A front end resolves the
//! route with [`ScanEndpoint::from_path`], deserializes the body into a
//! [`ScanRequest`] and calls [`ScanApi::handle`], or passes the raw body to
//! [`ScanApi::handle_json`].
//!
//! | Route               | Body                          |
//! |---------------------|-------------------------------|
//! | `/api/v1/scan`      | `{text}` or `{filePath}`      |
//! | `/api/v1/scan/text` | `{text}`                      |
//! | `/api/v1/scan/file` | `{filePath}`                  |
//!
//! Scanned text is never logged.

pub mod error;
pub mod request;

pub use error::ApiError;
pub use request::{ScanEndpoint, ScanRequest};

use crate::config::LimitsConfig;
use crate::domain::FileReadError;
use crate::scanner::{ScanResults, ScanService};
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

/// Serialized response of [`ScanApi::handle_json`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

impl ApiResponse {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        let body = serde_json::to_string(value).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize response body");
            String::from("{}")
        });
        Self { status, body }
    }

    /// Check if the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Validating front door to the scan service
#[derive(Debug, Clone)]
pub struct ScanApi {
    service: ScanService,
    max_input_length: usize,
}

impl ScanApi {
    /// Create the request layer over a scan service
    pub fn new(service: ScanService, max_input_length: usize) -> Self {
        Self {
            service,
            max_input_length,
        }
    }

    /// Create the request layer and apply the file limits from `limits`
    pub fn from_limits(service: ScanService, limits: &LimitsConfig) -> Self {
        let mut service = service;
        if let Some(bytes) = limits.max_file_size() {
            service = service.with_max_file_size(bytes);
        }
        if let Some(timeout) = limits.file_read_timeout() {
            service = service.with_file_read_timeout(timeout);
        }
        Self::new(service, limits.max_input_length)
    }

    /// Maximum accepted text length, in characters
    pub fn max_input_length(&self) -> usize {
        self.max_input_length
    }

    /// Validate and execute one scan request
    ///
    /// `remote_addr` is only used for logging.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] for invalid bodies,
    /// [`ApiError::NotFound`] when the file does not exist and
    /// [`ApiError::Internal`] when an existing file cannot be read.
    pub async fn handle(
        &self,
        endpoint: ScanEndpoint,
        request: &ScanRequest,
        remote_addr: Option<&str>,
    ) -> Result<ScanResults, ApiError> {
        let request_id = Uuid::new_v4();
        let remote = remote_addr.unwrap_or("unknown");

        let target = match self.validate(endpoint, request) {
            Ok(target) => target,
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    remote = remote,
                    endpoint = endpoint.path(),
                    error = %e,
                    "Rejected scan request"
                );
                return Err(e);
            }
        };

        tracing::info!(
            request_id = %request_id,
            remote = remote,
            endpoint = endpoint.path(),
            "Scanning incoming request"
        );

        let results = match target {
            ScanTarget::Text(text) => self.service.scan(text),
            ScanTarget::File(path) => {
                if !Path::new(path).exists() {
                    tracing::warn!(
                        request_id = %request_id,
                        remote = remote,
                        path = path,
                        "Request points to a non-existing file"
                    );
                    return Err(ApiError::NotFound(format!("File not found at path {path}")));
                }
                self.service
                    .scan_file(path)
                    .await
                    .map_err(|e| file_read_to_api_error(&e))?
            }
        };

        if results.has_errors() {
            tracing::warn!(
                request_id = %request_id,
                failed_detectors = results.errors.len(),
                "Scan completed with detector errors"
            );
        }

        Ok(results)
    }

    /// Route, parse and execute a raw JSON request
    ///
    /// Always produces a response: scan results with status 200, or an error
    /// body (see [`ApiError::body`]) with the matching status.
    pub async fn handle_json(
        &self,
        path: &str,
        body: &str,
        remote_addr: Option<&str>,
    ) -> ApiResponse {
        let Some(endpoint) = ScanEndpoint::from_path(path) else {
            let err = ApiError::NotFound(format!("No endpoint at {path}"));
            return ApiResponse::json(err.status_code(), &err.body());
        };

        let request: ScanRequest = match serde_json::from_str(body) {
            Ok(request) => request,
            Err(e) => {
                let err = ApiError::BadRequest(format!("Malformed request body: {e}"));
                return ApiResponse::json(err.status_code(), &err.body());
            }
        };

        match self.handle(endpoint, &request, remote_addr).await {
            Ok(results) => ApiResponse::json(200, &results),
            Err(err) => ApiResponse::json(err.status_code(), &err.body()),
        }
    }

    fn validate<'a>(
        &self,
        endpoint: ScanEndpoint,
        request: &'a ScanRequest,
    ) -> Result<ScanTarget<'a>, ApiError> {
        let text = request.text_value();
        let file_path = request.file_path_value();

        let target = match endpoint {
            ScanEndpoint::Scan => match (text, file_path) {
                (None, None) => {
                    return Err(ApiError::BadRequest(
                        "Either the 'text' or the 'filePath' field must be specified.".to_string(),
                    ))
                }
                (Some(_), Some(_)) => {
                    return Err(ApiError::BadRequest(
                        "Either the 'text' or the 'filePath' field can be specified, but not both."
                            .to_string(),
                    ))
                }
                (Some(text), None) => ScanTarget::Text(text),
                (None, Some(path)) => ScanTarget::File(path),
            },
            ScanEndpoint::Text => ScanTarget::Text(text.ok_or_else(|| {
                ApiError::BadRequest("The 'text' field must be specified.".to_string())
            })?),
            ScanEndpoint::File => ScanTarget::File(file_path.ok_or_else(|| {
                ApiError::BadRequest("The 'filePath' field must be specified.".to_string())
            })?),
        };

        if let ScanTarget::Text(text) = target {
            let length = text.chars().count();
            if length > self.max_input_length {
                return Err(ApiError::BadRequest(format!(
                    "Input exceeds max allowed body size ({} characters).",
                    self.max_input_length
                )));
            }
        }

        Ok(target)
    }
}

/// What a validated request asks to scan
#[derive(Debug, Clone, Copy)]
enum ScanTarget<'a> {
    Text(&'a str),
    File(&'a str),
}

fn file_read_to_api_error(err: &FileReadError) -> ApiError {
    match err {
        FileReadError::NotFound { .. } => {
            ApiError::NotFound(format!("File not found at path {}", err.path().display()))
        }
        FileReadError::TooLarge { limit, .. } => ApiError::BadRequest(format!(
            "File exceeds max allowed size ({limit} bytes)."
        )),
        _ => ApiError::Internal("Failed to read file at given path.".to_string()),
    }
}
