// DLP Engine - Social Security Number and IBAN scanner
// Copyright (c) 2025 DLP Engine Contributors
// Licensed under the MIT License

use clap::Parser;
use dlp_engine::cli::{build_scan_api, Cli, Commands};
use dlp_engine::config::{load_config_or_default, DlpConfig};
use dlp_engine::logging::init_logging;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Scanning commands run with the loaded configuration; validate-config
    // reports its own load errors and init needs none.
    let config = if cli.command.needs_config() {
        match load_config_or_default(cli.config.as_deref().map(Path::new)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                process::exit(2);
            }
        }
    } else {
        DlpConfig::default()
    };

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.application.log_level.clone());
    let guard = match init_logging(&log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "DLP Engine - SSN and IBAN scanner"
    );

    let exit_code = tokio::select! {
        result = execute_command(&cli, &config) => match result {
            Ok(code) => code,
            Err(e) => {
                tracing::error!(error = %e, "Command execution failed");
                eprintln!("Error: {e}");
                5 // Fatal error exit code
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received SIGINT (Ctrl+C), cancelling command");
            eprintln!("\n⚠️  Interrupted");
            130
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: &DlpConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Scan(args) => args.execute(&build_scan_api(&config.limits)?).await,
        Commands::Request(args) => args.execute(&build_scan_api(&config.limits)?).await,
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()).await,
        Commands::Init(args) => args.execute().await,
    }
}
