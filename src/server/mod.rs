//! HTTP transport
//!
//! A thin axum adapter over [`AnonymizationEngine`](crate::anonymization::AnonymizationEngine):
//! request bodies are parsed leniently, validated by the engine, and the
//! resulting reports are returned as JSON.
//!
//! | Method | Path      | Response                                             |
//! |--------|-----------|------------------------------------------------------|
//! | GET    | `/health` | `{"ok": true}`                                       |
//! | POST   | `/scan`   | `{count, entities}`                                  |
//! | POST   | `/redact` | `{count, stats, redacted_text, entities, mode}`      |
//!
//! Validation failures return `400` with a `{"message": ...}` body.

pub mod app;
pub mod error;
pub mod routes;

pub use app::{build_app, serve, AppState};
pub use error::ApiError;
