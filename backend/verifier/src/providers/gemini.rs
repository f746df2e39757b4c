use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use verifact_core::{
    GroundingSource, VerifactError, VerificationRequest, VerificationResult, Verifier,
};
use verifact_logging::redact_credentials;

use crate::parse;
use crate::prompt::SYSTEM_INSTRUCTION;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Gemini-backed verification adapter.
///
/// The API key is injected at construction; there is no shared client and no
/// embedded credential.
pub struct GeminiVerifier {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiVerifier {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Full request URL with the key attached, for logging only. The
    /// credential is scrubbed before the string leaves this method.
    fn redacted_request_url(&self) -> String {
        redact_credentials(&format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        ))
    }

    fn build_request(&self, request: &VerificationRequest) -> GenerateContentRequest {
        // The text part is always present, even for an empty string, so an
        // image-only submission still produces a well-formed payload.
        let mut parts = vec![Part {
            text: Some(request.text.clone()),
            inline_data: None,
        }];
        if let Some(image) = &request.image {
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: image.mime_type.clone(),
                    data: STANDARD.encode(&image.data),
                }),
            });
        }

        GenerateContentRequest {
            system_instruction: ContentBlock {
                parts: vec![Part {
                    text: Some(SYSTEM_INSTRUCTION.to_string()),
                    inline_data: None,
                }],
            },
            contents: vec![ContentBlock { parts }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        }
    }

    async fn call(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        let start = Instant::now();
        let body = self.build_request(request);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        debug!(
            url = %self.redacted_request_url(),
            has_image = request.image.is_some(),
            text_chars = request.text.len(),
            "Sending verification request to Gemini"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .context("Gemini HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini returned {}: {}", status, error_body);
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        debug!(
            latency_ms = start.elapsed().as_millis() as u64,
            "Gemini call completed"
        );

        Ok(assemble_result(&reply))
    }
}

#[async_trait]
impl Verifier for GeminiVerifier {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResult, VerifactError> {
        // Single collapse point: the caller only ever sees the generic
        // analysis error, the cause stays in the logs. Transport errors can
        // echo the request URL with its key query parameter, so the cause is
        // scrubbed before it is written out.
        match self.call(request).await {
            Ok(result) => Ok(result),
            Err(cause) => {
                error!(
                    error = %redact_credentials(&format!("{cause:#}")),
                    "Verification call failed"
                );
                Err(VerifactError::Analysis)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types for `models/{model}:generateContent`
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: ContentBlock,
    contents: Vec<ContentBlock>,
    tools: Vec<Tool>,
}

#[derive(Serialize, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentBlock>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    title: Option<String>,
    uri: Option<String>,
}

// ---------------------------------------------------------------------------
// Response assembly
// ---------------------------------------------------------------------------

/// Convert a decoded service reply into the typed result.
///
/// The raw answer text is the concatenation of all text parts of the first
/// candidate; a missing candidate or empty answer degrades to the parser's
/// defaults instead of failing.
fn assemble_result(reply: &GenerateContentResponse) -> VerificationResult {
    let candidate = reply.candidates.first();

    let raw_text = candidate
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let report = parse::parse_report(&raw_text);

    let sources = candidate
        .and_then(|c| c.grounding_metadata.as_ref())
        .map(|metadata| collect_sources(&metadata.grounding_chunks))
        .unwrap_or_default();

    VerificationResult {
        score: report.score,
        verdict: report.verdict,
        summary: report.summary,
        details: report.details,
        sources,
        timestamp: Utc::now(),
    }
}

/// Map grounding chunks to cited sources, preserving service order.
///
/// Chunks without a web reference (or without a URI) are dropped; a missing
/// title falls back to "External Source".
fn collect_sources(chunks: &[GroundingChunk]) -> Vec<GroundingSource> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            web.uri.as_ref().map(|uri| GroundingSource {
                title: web
                    .title
                    .clone()
                    .unwrap_or_else(|| "External Source".to_string()),
                uri: uri.clone(),
            })
        })
        .collect()
}
