use async_trait::async_trait;
use chrono::Utc;

use verifact_core::{
    GroundingSource, VerifactError, VerificationRequest, VerificationResult, Verifier,
};

use crate::parse;

/// A mock verifier that parses a canned answer without network access.
///
/// Runs the real report parser over the configured answer text, so tests
/// exercise the same tolerance policy as the live adapter.
pub struct MockVerifier {
    answer: Option<String>,
    sources: Vec<GroundingSource>,
    fail: bool,
}

impl MockVerifier {
    pub fn new() -> Self {
        Self {
            answer: None,
            sources: Vec::new(),
            fail: false,
        }
    }

    /// A verifier whose every call fails with the generic analysis error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn with_source(mut self, title: impl Into<String>, uri: impl Into<String>) -> Self {
        self.sources.push(GroundingSource {
            title: title.into(),
            uri: uri.into(),
        });
        self
    }
}

impl Default for MockVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Verifier for MockVerifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn verify(
        &self,
        _request: &VerificationRequest,
    ) -> Result<VerificationResult, VerifactError> {
        if self.fail {
            return Err(VerifactError::Analysis);
        }
        let report = parse::parse_report(self.answer.as_deref().unwrap_or(""));
        Ok(VerificationResult {
            score: report.score,
            verdict: report.verdict,
            summary: report.summary,
            details: report.details,
            sources: self.sources.clone(),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verifact_core::Verdict;

    #[tokio::test]
    async fn parses_the_canned_answer() {
        let verifier = MockVerifier::new()
            .with_answer("# TRUST_SCORE: 92\n# VERDICT: Reliable\n# SUMMARY: Checks out.")
            .with_source("Reuters", "https://reuters.com/x");
        let result = verifier
            .verify(&VerificationRequest::text("claim"))
            .await
            .unwrap();
        assert_eq!(result.score, 92);
        assert_eq!(result.verdict, Verdict::Reliable);
        assert_eq!(result.sources.len(), 1);
    }

    #[tokio::test]
    async fn failing_mock_surfaces_the_generic_error() {
        let verifier = MockVerifier::failing();
        let err = verifier
            .verify(&VerificationRequest::text("claim"))
            .await
            .unwrap_err();
        assert!(matches!(err, VerifactError::Analysis));
        assert_eq!(
            err.to_string(),
            "Failed to analyze content. Please try again."
        );
    }
}
