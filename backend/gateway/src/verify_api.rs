//! Verification API endpoint.
//!
//! Input validation (non-blank text or an image) lives here, before the
//! adapter is invoked; the adapter itself never re-checks it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use verifact_core::{VerifactError, VerificationRequest, VerificationResult};
use verifact_verifier::data_uri;

use crate::server::GatewayState;

/// One verification submission from a client.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub text: String,
    /// Optional image as a base64 data URI.
    pub image: Option<String>,
}

/// Errors surfaced by the verify endpoint.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Handle one verification submission.
pub async fn verify(
    State(state): State<GatewayState>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<VerificationResult>, ApiError> {
    let request = build_request(&body)?;
    let request_id = Uuid::new_v4();

    info!(
        %request_id,
        provider = state.verifier.name(),
        has_image = request.image.is_some(),
        text_chars = request.text.len(),
        "Verification started"
    );

    match state.verifier.verify(&request).await {
        Ok(result) => {
            info!(
                %request_id,
                score = result.score,
                verdict = %result.verdict,
                sources = result.sources.len(),
                "Verification completed"
            );
            Ok(Json(result))
        }
        Err(err) => {
            error!(%request_id, error = %err, "Verification failed");
            Err(ApiError::Upstream(err.to_string()))
        }
    }
}

/// Validate and decode the submission.
fn build_request(body: &VerifyRequest) -> Result<VerificationRequest, ApiError> {
    let mut request = VerificationRequest::text(body.text.clone());
    if let Some(uri) = &body.image {
        let image = data_uri::parse_data_uri(uri)
            .map_err(|e| ApiError::BadRequest(format!("invalid image data URI: {e}")))?;
        request = request.with_image(image);
    }
    if !request.has_content() {
        return Err(ApiError::BadRequest(VerifactError::EmptyRequest.to_string()));
    }
    Ok(request)
}

/// Health check endpoint.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "verifact",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use verifact_core::Verdict;
    use verifact_verifier::MockVerifier;

    fn state_with(verifier: MockVerifier) -> GatewayState {
        GatewayState {
            verifier: Arc::new(verifier),
        }
    }

    #[tokio::test]
    async fn rejects_blank_submissions_before_calling_the_adapter() {
        // A failing adapter proves validation short-circuits first.
        let state = state_with(MockVerifier::failing());
        let body = VerifyRequest {
            text: "   ".into(),
            image: None,
        };
        let err = verify(State(state), Json(body)).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn rejects_malformed_image_data_uris() {
        let state = state_with(MockVerifier::new());
        let body = VerifyRequest {
            text: String::new(),
            image: Some("https://example.com/a.png".into()),
        };
        let err = verify(State(state), Json(body)).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn returns_the_adapter_result_on_success() {
        let state = state_with(
            MockVerifier::new()
                .with_answer("# TRUST_SCORE: 5\n# VERDICT: Fake\n# SUMMARY: No credible evidence.\n# FINDINGS: - No outlets report this.")
                .with_source("Reuters", "https://reuters.com/x"),
        );
        let body = VerifyRequest {
            text: "Breaking: aliens land in Ohio".into(),
            image: None,
        };
        let Json(result) = verify(State(state), Json(body)).await.unwrap();
        assert_eq!(result.score, 5);
        assert_eq!(result.verdict, Verdict::Fake);
        assert_eq!(result.sources[0].uri, "https://reuters.com/x");
    }

    #[tokio::test]
    async fn image_only_submissions_are_accepted() {
        let state = state_with(MockVerifier::new());
        let body = VerifyRequest {
            text: String::new(),
            image: Some("data:image/png;base64,aGVsbG8=".into()),
        };
        assert!(verify(State(state), Json(body)).await.is_ok());
    }

    #[tokio::test]
    async fn adapter_failures_surface_the_generic_message() {
        let state = state_with(MockVerifier::failing());
        let body = VerifyRequest {
            text: "some claim".into(),
            image: None,
        };
        let err = verify(State(state), Json(body)).await.unwrap_err();
        match err {
            ApiError::Upstream(msg) => {
                assert_eq!(msg, "Failed to analyze content. Please try again.")
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
