//! Scan command implementation
//!
//! Runs the combined `/api/v1/scan` route for inline text or a file and
//! prints the results to stdout.

use crate::api::{ScanApi, ScanEndpoint, ScanRequest};
use crate::cli::exit_code_for_status;
use crate::scanner::ScanResults;
use clap::Args;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Text to scan
    #[arg(short, long)]
    pub text: Option<String>,

    /// Path of a UTF-8 file to scan
    #[arg(short, long)]
    pub file: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, api: &ScanApi) -> anyhow::Result<i32> {
        let request = ScanRequest::new(self.text.as_deref(), self.file.as_deref());

        match api.handle(ScanEndpoint::Scan, &request, None).await {
            Ok(results) => {
                println!("{}", self.render(&results)?);
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ {e}");
                Ok(exit_code_for_status(e.status_code()))
            }
        }
    }

    fn render(&self, results: &ScanResults) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(results)
        } else {
            serde_json::to_string(results)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_scan_api;
    use crate::config::LimitsConfig;

    fn args(text: Option<&str>, file: Option<&str>) -> ScanArgs {
        ScanArgs {
            text: text.map(str::to_string),
            file: file.map(str::to_string),
            pretty: false,
        }
    }

    #[tokio::test]
    async fn test_scan_text_succeeds() {
        let api = build_scan_api(&LimitsConfig::default()).unwrap();
        let scan = args(Some("ssn 123-45-6789"), None);
        let code = scan.execute(&api).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_scan_without_input_is_bad_request() {
        let api = build_scan_api(&LimitsConfig::default()).unwrap();
        let code = args(None, None).execute(&api).await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_scan_missing_file_is_not_found() {
        let api = build_scan_api(&LimitsConfig::default()).unwrap();
        let code = args(None, Some("/definitely/not/here.txt"))
            .execute(&api)
            .await
            .unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn test_render_pretty() {
        let mut scan = args(None, None);
        scan.pretty = true;
        let rendered = scan.render(&ScanResults::default()).unwrap();
        assert_eq!(rendered, "{}");
    }
}
