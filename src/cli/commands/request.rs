//! Request command implementation
//!
//! Feeds a raw JSON body to one of the scan routes, the same way an HTTP
//! front end would, and prints the response body.

use crate::api::{ScanApi, ScanEndpoint};
use crate::cli::exit_code_for_status;
use clap::Args;
use tokio::io::AsyncReadExt;

/// Arguments for the request command
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Route to call (/api/v1/scan, /api/v1/scan/text, /api/v1/scan/file)
    #[arg(short, long, default_value = "/api/v1/scan")]
    pub path: String,

    /// JSON request body (read from stdin when omitted)
    #[arg(short, long)]
    pub body: Option<String>,
}

impl RequestArgs {
    /// Execute the request command
    pub async fn execute(&self, api: &ScanApi) -> anyhow::Result<i32> {
        let body = match &self.body {
            Some(body) => body.clone(),
            None => {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                buf
            }
        };

        tracing::debug!(
            path = %self.path,
            known_route = ScanEndpoint::from_path(&self.path).is_some(),
            body_len = body.len(),
            "Dispatching request"
        );

        let response = api.handle_json(&self.path, &body, Some("cli")).await;
        println!("{}", response.body);

        Ok(exit_code_for_status(response.status))
    }
}
