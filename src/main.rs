// PII Redactor - Korean PII detection and masking service
// Copyright (c) 2025 PII Redactor Contributors
// Licensed under the MIT License

use clap::Parser;
use pii_redactor::cli::{Cli, Commands};
use pii_redactor::config::{load_config_or_default, LoggingConfig, RedactorConfig};
use pii_redactor::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // validate-config reports load failures itself
    if let Commands::ValidateConfig(ref args) = cli.command {
        let log_level = cli.log_level.as_deref().unwrap_or("info");
        let _guard = match init_logging(log_level, &LoggingConfig::default()) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Failed to initialize logging: {e}");
                process::exit(5);
            }
        };
        let exit_code = match args.execute(cli.config.as_deref()).await {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {e}");
                5
            }
        };
        process::exit(exit_code);
    }

    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.application.log_level.clone());
    let guard = match init_logging(&log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "PII Redactor - Korean PII detection and masking"
    );

    let exit_code = match execute_command(&cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: &RedactorConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Serve(args) => args.execute(config).await,
        Commands::Scan(args) => args.execute(config).await,
        Commands::Redact(args) => args.execute(config).await,
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()).await,
    }
}
