//! Integration tests for the scan request layer

use dlp_engine::api::{ApiError, ScanApi, ScanEndpoint, ScanRequest};
use dlp_engine::config::LimitsConfig;
use dlp_engine::scanner::{DetectorRegistry, ScanResults, ScanService, SensitiveDataType};
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir};

fn api_with(limits: LimitsConfig) -> ScanApi {
    let registry = Arc::new(DetectorRegistry::builtin().unwrap());
    ScanApi::from_limits(ScanService::new(registry), &limits)
}

fn default_api() -> ScanApi {
    api_with(LimitsConfig::default())
}

fn fixture_path(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

#[tokio::test]
async fn test_scan_text_route() {
    let results = default_api()
        .handle(
            ScanEndpoint::Text,
            &ScanRequest::text("My social security number is 123-45-6789"),
            Some("127.0.0.1"),
        )
        .await
        .unwrap();

    let ssn = results.result_for(SensitiveDataType::Ssn).unwrap();
    assert_eq!((ssn.count, ssn.context_rank), (1, 1));
}

#[tokio::test]
async fn test_combined_route_dispatches_file() {
    let results = default_api()
        .handle(
            ScanEndpoint::Scan,
            &ScanRequest::file(fixture_path("text_with_iban.txt")),
            None,
        )
        .await
        .unwrap();

    assert_eq!(
        results.result_for(SensitiveDataType::Iban).map(|r| r.count),
        Some(4)
    );
}

#[tokio::test]
async fn test_combined_route_requires_one_field() {
    let err = default_api()
        .handle(ScanEndpoint::Scan, &ScanRequest::new(None, None), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    let err = default_api()
        .handle(
            ScanEndpoint::Scan,
            &ScanRequest::new(Some("abc"), Some("/tmp/abc.txt")),
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_blank_fields_count_as_missing() {
    let err = default_api()
        .handle(ScanEndpoint::Text, &ScanRequest::text("   "), None)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    let err = default_api()
        .handle(ScanEndpoint::File, &ScanRequest::file(""), None)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_text_length_limit() {
    let api = api_with(LimitsConfig {
        max_input_length: 11,
        ..LimitsConfig::default()
    });

    let at_limit = api
        .handle(ScanEndpoint::Text, &ScanRequest::text("123-45-6789"), None)
        .await
        .unwrap();
    assert_eq!(at_limit.total_count(), 1);

    let err = api
        .handle(ScanEndpoint::Text, &ScanRequest::text("123-45-67890"), None)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let err = default_api()
        .handle(
            ScanEndpoint::File,
            &ScanRequest::file("/nonexistent/dlp/input.txt"),
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_oversized_file_is_bad_request() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[b'a'; 64]).unwrap();
    file.flush().unwrap();

    let api = api_with(LimitsConfig {
        max_file_size_bytes: 16,
        ..LimitsConfig::default()
    });
    let err = api
        .handle(
            ScanEndpoint::File,
            &ScanRequest::file(file.path().to_string_lossy()),
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_unreadable_file_is_internal_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();
    file.flush().unwrap();

    let err = default_api()
        .handle(
            ScanEndpoint::File,
            &ScanRequest::file(file.path().to_string_lossy()),
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.to_string(), "Failed to read file at given path.");
}

#[tokio::test]
async fn test_directory_is_internal_error() {
    let dir = TempDir::new().unwrap();
    let err = default_api()
        .handle(
            ScanEndpoint::File,
            &ScanRequest::file(dir.path().to_string_lossy()),
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_handle_json_success() {
    let response = default_api()
        .handle_json(
            "/api/v1/scan",
            r#"{"text": "GB29 NWBK 6016 1331 9268 19"}"#,
            None,
        )
        .await;

    assert_eq!(response.status, 200);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(
        body,
        json!({"results": [{"type": "IBAN Bank Account Code", "count": 1, "contextRank": 0}]})
    );
}

#[tokio::test]
async fn test_handle_json_file_path_field() {
    let body = json!({ "filePath": fixture_path("text_with_iban.txt") }).to_string();
    let response = default_api()
        .handle_json("/api/v1/scan/file/", &body, None)
        .await;

    assert_eq!(response.status, 200);
    let results: ScanResults = serde_json::from_str(&response.body).unwrap();
    assert_eq!(results.total_count(), 4);
}

#[tokio::test]
async fn test_handle_json_no_findings() {
    let response = default_api()
        .handle_json("/api/v1/scan/text", r#"{"text": "hello world"}"#, None)
        .await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, "{}");
}

#[tokio::test]
async fn test_handle_json_unknown_route() {
    let response = default_api()
        .handle_json("/api/v1/scan/image", r#"{"text": "x"}"#, None)
        .await;

    assert_eq!(response.status, 404);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_handle_json_malformed_body() {
    let response = default_api()
        .handle_json("/api/v1/scan/text", "{\"text\": ", None)
        .await;
    assert_eq!(response.status, 400);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_handle_json_empty_object() {
    let response = default_api().handle_json("/api/v1/scan", "{}", None).await;
    assert_eq!(response.status, 400);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(
        body["message"],
        "Either the 'text' or the 'filePath' field must be specified."
    );
}
