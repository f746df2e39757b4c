use thiserror::Error;

/// Top-level error type for the VeriFact runtime.
#[derive(Debug, Error)]
pub enum VerifactError {
    /// Submission carried neither non-blank text nor an image. Raised by the
    /// callers' validation; the adapter itself never re-checks this.
    #[error("Provide text or an image to verify.")]
    EmptyRequest,

    /// The single error surfaced for any failure of the external call —
    /// transport, auth, quota, or response shape. The cause is logged at the
    /// adapter boundary and never carried to the caller.
    #[error("Failed to analyze content. Please try again.")]
    Analysis,

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
