//! Core types, traits, and errors for the VeriFact verification runtime.

pub mod error;
pub mod progress;
pub mod traits;
pub mod types;

pub use error::VerifactError;
pub use progress::{AnalysisStep, EVALUATING_DELAY, SEARCHING_DELAY};
pub use traits::Verifier;
pub use types::{
    GroundingSource, ImageAttachment, TrustBand, Verdict, VerificationRequest,
    VerificationResult,
};
