//! Structured logging for VeriFact.
//!
//! Console + rolling NDJSON file output via `tracing`, plus credential
//! redaction for strings destined for the logs.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::redact_credentials;
