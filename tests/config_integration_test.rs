//! Integration tests for configuration loading and validation
//!
//! Tests that touch `PII_REDACTOR_*` variables hold `ENV_MUTEX` so they do
//! not observe each other's overrides.

use pii_redactor::anonymization::{AnonymizationEngine, MaskMode, OverlapPolicy, RedactRequest};
use pii_redactor::config::{load_config, load_config_or_default};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("PII_REDACTOR_SERVER_PORT");
    std::env::remove_var("PII_REDACTOR_APPLICATION_LOG_LEVEL");
    std::env::remove_var("PII_REDACTOR_ANONYMIZATION_DEFAULT_MODE");
    std::env::remove_var("PII_REDACTOR_ANONYMIZATION_OVERLAP");
    std::env::remove_var("TEST_PII_REDACTOR_HOST");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r##"
[application]
log_level = "debug"

[server]
host = "127.0.0.1"
port = 9100
request_timeout_seconds = 5
max_body_bytes = 4096

[anonymization]
overlap = "keep_all"
default_mode = "token"
mask_char = "#"

[logging]
local_enabled = false
local_path = "/tmp/pii-redactor-logs"
local_rotation = "hourly"
json = true
"##,
    );

    let config = load_config(file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.server.bind_address(), "127.0.0.1:9100");
    assert_eq!(config.server.request_timeout_seconds, 5);
    assert_eq!(config.server.max_body_bytes, 4096);
    assert_eq!(config.anonymization.overlap, OverlapPolicy::KeepAll);
    assert_eq!(config.anonymization.default_mode, MaskMode::Token);
    assert_eq!(config.anonymization.mask_char, '#');
    assert_eq!(config.logging.local_rotation, "hourly");
    assert!(config.logging.json);
}

#[test]
fn test_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[application]\nlog_level = \"warn\"\n");
    let config = load_config(file.path()).expect("Failed to load config");

    assert_eq!(config.server.port, 8017);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.anonymization.default_mode, MaskMode::Partial);
    assert_eq!(config.anonymization.overlap, OverlapPolicy::LongestWins);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_PII_REDACTOR_HOST", "10.0.0.5");

    let file = write_config(
        r#"
# host = "${NOT_SET_ANYWHERE}"
[server]
host = "${TEST_PII_REDACTOR_HOST}"
"#,
    );
    let result = load_config(file.path());
    cleanup_env_vars();

    let config = result.expect("Failed to load config");
    assert_eq!(config.server.host, "10.0.0.5");
}

#[test]
fn test_missing_env_var_fails() {
    let file = write_config("[server]\nhost = \"${PII_REDACTOR_TEST_UNDEFINED_HOST}\"\n");

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("PII_REDACTOR_TEST_UNDEFINED_HOST"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("PII_REDACTOR_SERVER_PORT", "9200");
    std::env::set_var("PII_REDACTOR_ANONYMIZATION_DEFAULT_MODE", "full");

    let file = write_config("[server]\nport = 8080\n");
    let from_file = load_config(file.path());
    let from_defaults = load_config_or_default(None);
    cleanup_env_vars();

    let from_file = from_file.expect("Failed to load config");
    assert_eq!(from_file.server.port, 9200);
    assert_eq!(from_file.anonymization.default_mode, MaskMode::Full);

    let from_defaults = from_defaults.expect("Failed to load defaults");
    assert_eq!(from_defaults.server.port, 9200);
}

#[test]
fn test_invalid_override_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("PII_REDACTOR_ANONYMIZATION_OVERLAP", "shortest_wins");

    let result = load_config_or_default(None);
    cleanup_env_vars();

    assert!(result.is_err());
}

#[test]
fn test_invalid_values_fail_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    for content in [
        "[application]\nlog_level = \"verbose\"\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
        "[anonymization]\ndefault_mode = \"hash\"\n",
        "[anonymization]\npattern_library = \"/nonexistent/patterns.toml\"\n",
    ] {
        let file = write_config(content);
        assert!(load_config(file.path()).is_err(), "accepted: {content}");
    }
}

#[test]
fn test_loaded_config_drives_engine() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[anonymization]\ndefault_mode = \"full\"\nmask_char = \"X\"\n");
    let config = load_config(file.path()).expect("Failed to load config");
    let engine = AnonymizationEngine::new(config.anonymization).expect("Failed to create engine");

    let report = engine
        .redact(&RedactRequest::new("900101-1234567"))
        .expect("Redact failed");
    assert_eq!(report.redacted_text, "XXXXXXXXXXXXXX");
}
