//! Redact command implementation

use super::{build_engine, exit_code_for, include_types, read_input, EXIT_OK};
use crate::anonymization::RedactRequest;
use crate::config::RedactorConfig;
use clap::Args;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Text to redact; read from stdin when omitted
    pub text: Option<String>,

    /// Masking mode (full, partial, token); defaults to the configured mode
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Restrict detection to these categories (rrn, phone, email, account, address)
    #[arg(short, long = "include", value_name = "TYPE")]
    pub include: Vec<String>,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config: &RedactorConfig) -> anyhow::Result<i32> {
        let engine = match build_engine(config) {
            Ok(engine) => engine,
            Err(code) => return Ok(code),
        };

        let text = read_input(self.text.as_deref())?;
        let request = RedactRequest {
            text: Some(text),
            mode: self.mode.clone(),
            include_types: include_types(&self.include),
        };

        match engine.redact(&request) {
            Ok(report) => {
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(EXIT_OK)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}
