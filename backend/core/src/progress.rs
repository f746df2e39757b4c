use std::time::Duration;

/// Delay from submission until the stepper shows [`AnalysisStep::Searching`].
pub const SEARCHING_DELAY: Duration = Duration::from_millis(1500);

/// Delay from submission until the stepper shows [`AnalysisStep::Evaluating`].
pub const EVALUATING_DELAY: Duration = Duration::from_millis(3500);

/// Cosmetic progress steps shown while a verification call is outstanding.
///
/// The steps advance on the fixed delays above and are never coupled to the
/// real call: the external service reports no sub-progress, so the label can
/// lag or outrun the actual request. Treat this as an indeterminate spinner
/// with flavor text, not a lifecycle signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStep {
    Idle,
    Scanning,
    Searching,
    Evaluating,
    Completed,
}

impl AnalysisStep {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Scanning => "Scanning text and images...",
            Self::Searching => "Cross-referencing with global news sources...",
            Self::Evaluating => "Analyzing claims for misinformation patterns...",
            _ => "Wait a moment...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluating_follows_searching() {
        assert!(EVALUATING_DELAY > SEARCHING_DELAY);
    }

    #[test]
    fn idle_and_completed_share_the_fallback_message() {
        assert_eq!(AnalysisStep::Idle.message(), AnalysisStep::Completed.message());
        assert_ne!(AnalysisStep::Scanning.message(), AnalysisStep::Idle.message());
    }
}
