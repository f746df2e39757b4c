use async_trait::async_trait;

use crate::error::VerifactError;
use crate::types::{VerificationRequest, VerificationResult};

/// Trait for verification adapters backed by an external model service.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Adapter name (e.g., "gemini", "mock").
    fn name(&self) -> &str;

    /// Run one credibility assessment for the given request.
    ///
    /// Fails only with [`VerifactError::Analysis`]; missing or malformed
    /// fields in the model's answer are absorbed into defaults, not errors.
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResult, VerifactError>;
}
