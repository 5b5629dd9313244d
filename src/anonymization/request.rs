//! Loosely-typed scan and redact requests
//!
//! Requests mirror what a caller sends over the wire. They are only turned
//! into typed values (mask mode, category filter) by the engine, which rejects
//! invalid input before any detection runs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request for a scan (detection only)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Text to scan
    #[serde(default)]
    pub text: Option<String>,
    /// Restrict detection to these category names
    #[serde(default)]
    pub include_types: Option<Vec<String>>,
}

/// Request for a redaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactRequest {
    /// Text to redact
    #[serde(default)]
    pub text: Option<String>,
    /// Mask mode name (`full`, `partial`, `token`)
    #[serde(default)]
    pub mode: Option<String>,
    /// Restrict detection to these category names
    #[serde(default)]
    pub include_types: Option<Vec<String>>,
}

impl ScanRequest {
    /// Create a request scanning all categories
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            include_types: None,
        }
    }

    /// Restrict the scan to the given category names
    pub fn with_include_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Build a request from a raw JSON body
    ///
    /// Anything that is not a JSON object is treated as an empty payload.
    pub fn from_json_body(body: &[u8]) -> Self {
        let payload = parse_payload(body);
        Self {
            text: text_field(&payload),
            include_types: include_types_field(&payload),
        }
    }
}

impl RedactRequest {
    /// Create a request using the configured default mode
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            mode: None,
            include_types: None,
        }
    }

    /// Set the mask mode name
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Restrict redaction to the given category names
    pub fn with_include_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Build a request from a raw JSON body
    ///
    /// Anything that is not a JSON object is treated as an empty payload.
    pub fn from_json_body(body: &[u8]) -> Self {
        let payload = parse_payload(body);
        // An explicit null is a mode value, and an invalid one
        let mode = match payload.get("mode") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self {
            text: text_field(&payload),
            mode,
            include_types: include_types_field(&payload),
        }
    }
}

fn parse_payload(body: &[u8]) -> serde_json::Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    }
}

/// Strings pass through; numbers and booleans are scanned as their text form
fn text_field(payload: &serde_json::Map<String, Value>) -> Option<String> {
    match payload.get("text")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Non-array values are ignored
///
/// Non-string elements keep their JSON text, which never names a category,
/// so `[3]` stays a non-empty list that matches nothing.
fn include_types_field(payload: &serde_json::Map<String, Value>) -> Option<Vec<String>> {
    match payload.get("include_types")? {
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    }
}
