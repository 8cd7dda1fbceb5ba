//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "dlp.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing DLP engine configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Adjust the limits in {} if needed", self.output);
                println!(
                    "  2. Validate configuration: dlp-engine --config {} validate-config",
                    self.output
                );
                println!(
                    "  3. Scan something: dlp-engine --config {} scan --text \"...\"",
                    self.output
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every setting at its default
    fn sample_config() -> &'static str {
        r#"# DLP Engine Configuration File
#
# Every setting below shows its default. Any value can be overridden with
# an environment variable named DLP_<SECTION>_<KEY>, for example
# DLP_LIMITS_MAX_INPUT_LENGTH=8000. Values may reference environment
# variables with ${VAR_NAME}.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[limits]
# Maximum length of inline text, in characters
max_input_length = 4000

# Maximum size of a scanned file, in bytes (0 = unlimited)
max_file_size_bytes = 1048576

# Deadline for reading a scanned file, in milliseconds (0 = none)
file_read_timeout_ms = 5000

[logging]
# Write JSON log lines to a rotating file in addition to stderr
local_enabled = false

# Log directory
local_path = "./logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, DlpConfig};
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_matches_defaults() {
        let config: DlpConfig = toml::from_str(InitArgs::sample_config()).unwrap();
        assert_eq!(config, DlpConfig::default());
    }

    #[tokio::test]
    async fn test_init_writes_loadable_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("dlp.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(load_config(&output).is_ok());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("dlp.toml");
        fs::write(&output, "# keep me\n").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# keep me\n");

        let forced = InitArgs {
            force: true,
            ..args
        };
        assert_eq!(forced.execute().await.unwrap(), 0);
    }
}
