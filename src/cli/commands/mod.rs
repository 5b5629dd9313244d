//! CLI command implementations
//!
//! Every command returns the process exit code:
//! 0 success, 2 configuration error, 3 invalid input, 5 fatal error.

pub mod redact;
pub mod scan;
pub mod serve;
pub mod validate;

use crate::anonymization::AnonymizationEngine;
use crate::config::RedactorConfig;
use crate::domain::RedactorError;
use std::io::Read;

pub(crate) const EXIT_OK: i32 = 0;
pub(crate) const EXIT_CONFIG: i32 = 2;
pub(crate) const EXIT_INVALID_INPUT: i32 = 3;
pub(crate) const EXIT_FATAL: i32 = 5;

/// Map a library error onto an exit code
pub(crate) fn exit_code_for(err: &RedactorError) -> i32 {
    match err {
        RedactorError::Validation(_) => EXIT_INVALID_INPUT,
        RedactorError::Configuration(_) => EXIT_CONFIG,
        _ => EXIT_FATAL,
    }
}

/// Build the engine, printing the failure when the configuration is unusable
pub(crate) fn build_engine(config: &RedactorConfig) -> Result<AnonymizationEngine, i32> {
    AnonymizationEngine::new(config.anonymization.clone()).map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize anonymization engine");
        eprintln!("Error: {e}");
        exit_code_for(&e)
    })
}

/// Use the positional text if given, otherwise read all of stdin
pub(crate) fn read_input(text: Option<&str>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// `None` when no `--include` flags were given
pub(crate) fn include_types(include: &[String]) -> Option<Vec<String>> {
    if include.is_empty() {
        None
    } else {
        Some(include.to_vec())
    }
}
