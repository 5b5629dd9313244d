//! Scan command implementation

use super::{build_engine, exit_code_for, include_types, read_input, EXIT_OK};
use crate::anonymization::ScanRequest;
use crate::config::RedactorConfig;
use clap::Args;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Text to scan; read from stdin when omitted
    pub text: Option<String>,

    /// Restrict detection to these categories (rrn, phone, email, account, address)
    #[arg(short, long = "include", value_name = "TYPE")]
    pub include: Vec<String>,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config: &RedactorConfig) -> anyhow::Result<i32> {
        let engine = match build_engine(config) {
            Ok(engine) => engine,
            Err(code) => return Ok(code),
        };

        let text = read_input(self.text.as_deref())?;
        let request = ScanRequest {
            text: Some(text),
            include_types: include_types(&self.include),
        };

        match engine.scan(&request) {
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
