//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the DLP engine configuration.

use crate::config::{load_config_or_default, DlpConfig};
use crate::scanner::DetectorRegistry;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Without a path, the defaults plus `DLP_*` overrides are validated.
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("<defaults>");
        tracing::info!(config_path = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match load_config_or_default(config_path.map(Path::new)) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let registry = match DetectorRegistry::builtin() {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Failed to build detectors");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        println!();
        for line in Self::summary(&config, &registry) {
            println!("{line}");
        }
        println!();
        Ok(0)
    }

    fn summary(config: &DlpConfig, registry: &DetectorRegistry) -> Vec<String> {
        let limits = &config.limits;
        let mut lines = vec![
            "Configuration Summary:".to_string(),
            format!("  Log Level: {}", config.application.log_level),
            format!("  Max Input Length: {} characters", limits.max_input_length),
        ];

        lines.push(match limits.max_file_size() {
            Some(bytes) => format!("  Max File Size: {bytes} bytes"),
            None => "  Max File Size: unlimited".to_string(),
        });
        lines.push(match limits.file_read_timeout() {
            Some(timeout) => format!("  File Read Timeout: {} ms", timeout.as_millis()),
            None => "  File Read Timeout: none".to_string(),
        });

        if config.logging.local_enabled {
            lines.push(format!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            ));
        } else {
            lines.push("  File Logging: disabled".to_string());
        }

        lines.push(format!("  Detectors: {}", registry.names().join(", ")));
        lines
    }
}
