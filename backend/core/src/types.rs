use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inline image attachment, decoded from a data URI or read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// One verification submission: a text snippet and/or an image.
///
/// Callers must not issue a request where [`has_content`](Self::has_content)
/// is false; adapters do not re-validate and will forward an empty text part
/// to the external service as-is.
#[derive(Debug, Clone, Default)]
pub struct VerificationRequest {
    pub text: String,
    pub image: Option<ImageAttachment>,
}

impl VerificationRequest {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    /// Whether the request carries anything worth verifying.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty() || self.image.is_some()
    }
}

/// Closed set of verdict categories the model is asked to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Verdict {
    Reliable,
    #[serde(rename = "Partially True")]
    PartiallyTrue,
    Misleading,
    Fake,
    #[default]
    Unknown,
}

impl Verdict {
    /// Map a verdict label from the model's answer onto the closed set.
    ///
    /// Case-insensitive. Accepts the bare token "Partially" because the
    /// report regex captures a single word and truncates the two-word label.
    /// Anything unrecognized is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "reliable" => Self::Reliable,
            "partially" | "partially true" => Self::PartiallyTrue,
            "misleading" => Self::Misleading,
            "fake" => Self::Fake,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reliable => "Reliable",
            Self::PartiallyTrue => "Partially True",
            Self::Misleading => "Misleading",
            Self::Fake => "Fake",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A cited web source from the model's grounding metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// Trust-score band, mirroring the gauge colors of the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustBand {
    High,
    Solid,
    Mixed,
    Low,
    Critical,
}

impl TrustBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::High,
            60..=79 => Self::Solid,
            40..=59 => Self::Mixed,
            20..=39 => Self::Low,
            _ => Self::Critical,
        }
    }
}

/// Immutable result of one completed verification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Trust score, conceptually 0-100. Not clamped; defaults to 50 when the
    /// model's answer carries no parseable score.
    pub score: u32,
    pub verdict: Verdict,
    pub summary: String,
    pub details: String,
    /// Cited web sources, in the order returned by the external service.
    pub sources: Vec<GroundingSource>,
    /// Client-side clock at result assembly, not a server-reported time.
    pub timestamp: DateTime<Utc>,
}

impl VerificationResult {
    pub fn trust_band(&self) -> TrustBand {
        TrustBand::from_score(self.score)
    }
}
