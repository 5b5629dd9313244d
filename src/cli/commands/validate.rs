//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the redactor configuration file, including any custom pattern library.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::anonymization::AnonymizationEngine;
use crate::config::load_config_or_default;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("<built-in defaults>");
        tracing::info!(config_path = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => {
                println!("✅ Configuration loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        // Compiling the pattern library catches bad regexes and categories
        let engine = match AnonymizationEngine::new(config.anonymization.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                println!("❌ Pattern library is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Bind Address: {}", config.server.bind_address());
        println!(
            "  Request Timeout: {}s",
            config.server.request_timeout_seconds
        );
        println!("  Max Body Size: {} bytes", config.server.max_body_bytes);
        match config.anonymization.pattern_library {
            Some(ref path) => println!("  Pattern Library: {}", path.display()),
            None => println!("  Pattern Library: built-in"),
        }
        println!("  Overlap Policy: {:?}", engine.config().overlap);
        println!("  Default Mode: {}", config.anonymization.default_mode);
        println!("  Mask Character: {}", config.anonymization.mask_char);
        println!();
        Ok(EXIT_OK)
    }
}
