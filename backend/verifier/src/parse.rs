//! Tolerant parsing of the model's semi-structured verification report.
//!
//! Four independent extractions, each scanning the full answer text, so
//! partial or reordered sections still populate whichever fields match. A
//! missing or malformed section falls back to a documented default rather
//! than failing the verification.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use verifact_core::Verdict;

/// Score used when the answer carries no parseable `TRUST_SCORE:` line.
pub const DEFAULT_SCORE: u32 = 50;
pub const DEFAULT_SUMMARY: &str = "Analysis complete.";
pub const DEFAULT_DETAILS: &str = "Detailed analysis not provided.";

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)TRUST_SCORE:\s*(\d+)").unwrap());
// Single-token capture: a two-word label like "Partially True" arrives
// truncated to its first word. Verdict::from_label maps the truncation back
// onto the closed verdict set instead of widening the pattern.
static VERDICT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)VERDICT:\s*(\w+)").unwrap());
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)SUMMARY:\s*([^\n#]+)").unwrap());
static FINDINGS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)FINDINGS:\s*(.*)").unwrap());

/// Structured fields extracted from a raw model answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub score: u32,
    pub verdict: Verdict,
    pub summary: String,
    pub details: String,
}

/// Extract the report fields from the raw answer text.
///
/// Never fails; every absent field becomes its default value.
pub fn parse_report(raw: &str) -> VerificationReport {
    let score = match SCORE_RE.captures(raw) {
        Some(captures) => match captures[1].parse() {
            Ok(score) => score,
            Err(_) => {
                // Digits beyond u32 range are treated like a missing score.
                debug!(
                    digits = &captures[1],
                    "trust score out of range, defaulting to {DEFAULT_SCORE}"
                );
                DEFAULT_SCORE
            }
        },
        None => {
            debug!("no trust score in model answer, defaulting to {DEFAULT_SCORE}");
            DEFAULT_SCORE
        }
    };

    let verdict = match VERDICT_RE.captures(raw) {
        Some(captures) => Verdict::from_label(&captures[1]),
        None => {
            debug!("no verdict in model answer, defaulting to Unknown");
            Verdict::Unknown
        }
    };

    let summary = match SUMMARY_RE.captures(raw) {
        Some(captures) => captures[1].trim().to_string(),
        None => {
            debug!("no summary in model answer, defaulting");
            DEFAULT_SUMMARY.to_string()
        }
    };

    let details = match FINDINGS_RE.captures(raw) {
        Some(captures) => captures[1].trim().to_string(),
        None => {
            debug!("no findings in model answer, defaulting");
            DEFAULT_DETAILS.to_string()
        }
    };

    VerificationReport {
        score,
        verdict,
        summary,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_report() {
        let raw = "# TRUST_SCORE: 5\n# VERDICT: Fake\n# SUMMARY: No credible evidence.\n# FINDINGS: - No outlets report this.";
        let report = parse_report(raw);
        assert_eq!(report.score, 5);
        assert_eq!(report.verdict, Verdict::Fake);
        assert_eq!(report.summary, "No credible evidence.");
        assert_eq!(report.details, "- No outlets report this.");
    }

    #[test]
    fn score_line_parses_exactly() {
        let report = parse_report("# TRUST_SCORE: 73\n");
        assert_eq!(report.score, 73);
    }

    #[test]
    fn missing_score_defaults_to_fifty() {
        let report = parse_report("# VERDICT: Fake\n");
        assert_eq!(report.score, DEFAULT_SCORE);
    }

    #[test]
    fn overflowing_score_defaults_instead_of_failing() {
        let report = parse_report("# TRUST_SCORE: 99999999999");
        assert_eq!(report.score, DEFAULT_SCORE);
    }

    #[test]
    fn two_word_verdict_survives_the_single_token_capture() {
        // The regex only grabs "Partially"; from_label restores the variant.
        let report = parse_report("# VERDICT: Partially True\n");
        assert_eq!(report.verdict, Verdict::PartiallyTrue);
    }

    #[test]
    fn missing_summary_uses_the_fixed_placeholder() {
        let report = parse_report("# TRUST_SCORE: 90");
        assert_eq!(report.summary, DEFAULT_SUMMARY);
    }

    #[test]
    fn missing_findings_use_the_fixed_placeholder() {
        let report = parse_report("# SUMMARY: Checks out.");
        assert_eq!(report.details, DEFAULT_DETAILS);
    }

    #[test]
    fn empty_answer_yields_all_defaults() {
        let report = parse_report("");
        assert_eq!(
            report,
            VerificationReport {
                score: DEFAULT_SCORE,
                verdict: Verdict::Unknown,
                summary: DEFAULT_SUMMARY.to_string(),
                details: DEFAULT_DETAILS.to_string(),
            }
        );
    }

    #[test]
    fn reordered_sections_still_populate_fields() {
        let raw = "# FINDINGS:\n- Confirmed by two wire services.\n# VERDICT: Reliable\n# TRUST_SCORE: 92";
        let report = parse_report(raw);
        assert_eq!(report.score, 92);
        assert_eq!(report.verdict, Verdict::Reliable);
        // Findings capture runs to end of text, so later sections are included.
        assert!(report.details.contains("Confirmed by two wire services."));
    }

    #[test]
    fn summary_stops_at_newline_and_marker() {
        let raw = "# SUMMARY: Mostly accurate claim # trailing\nmore text";
        let report = parse_report(raw);
        assert_eq!(report.summary, "Mostly accurate claim");
    }

    #[test]
    fn findings_keep_multiline_bullets() {
        let raw = "# FINDINGS:\n- First point\n- Second point\n";
        let report = parse_report(raw);
        assert_eq!(report.details, "- First point\n- Second point");
    }

    #[test]
    fn markers_match_case_insensitively() {
        let report = parse_report("# trust_score: 61\n# verdict: misleading");
        assert_eq!(report.score, 61);
        assert_eq!(report.verdict, Verdict::Misleading);
    }
}
