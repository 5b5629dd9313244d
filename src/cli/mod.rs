//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the redactor using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// PII Redactor - Korean PII detection and masking
#[derive(Parser, Debug)]
#[command(name = "pii-redactor")]
#[command(version, about, long_about = None)]
#[command(author = "PII Redactor Contributors")]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, env = "PII_REDACTOR_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PII_REDACTOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve(commands::serve::ServeArgs),

    /// Detect PII in text and print the entities as JSON
    Scan(commands::scan::ScanArgs),

    /// Mask PII in text and print the result as JSON
    Redact(commands::redact::RedactArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
