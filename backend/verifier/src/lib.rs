//! Verification adapter for VeriFact.
//!
//! Builds the multimodal, search-grounded request for the external model,
//! performs the call, and converts the semi-structured text answer into a
//! typed [`verifact_core::VerificationResult`].

pub mod data_uri;
pub mod mime_detect;
pub mod parse;
pub mod prompt;
pub mod providers;

pub use providers::gemini::GeminiVerifier;
pub use providers::mock::MockVerifier;
