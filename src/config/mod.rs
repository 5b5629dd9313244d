//! Configuration management.
//!
//! TOML configuration with `${VAR_NAME}` environment substitution,
//! `PII_REDACTOR_<SECTION>_<KEY>` overrides and validation on load. Every
//! setting has a default, so running without a file is supported.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8017
//!
//! [anonymization]
//! overlap = "longest_wins"
//! default_mode = "partial"
//! mask_char = "*"
//!
//! [logging]
//! local_enabled = true
//! local_path = "${LOG_DIR}"
//! ```
//!
//! ```rust,no_run
//! use pii_redactor::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("pii-redactor.toml")?;
//! println!("Listening on {}", config.server.bind_address());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, RedactorConfig, ServerConfig};
