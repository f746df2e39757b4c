//! Terminal rendering for verification results.

use verifact_core::{TrustBand, VerificationResult};

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

fn band_color(band: TrustBand) -> &'static str {
    match band {
        TrustBand::High | TrustBand::Solid => GREEN,
        TrustBand::Mixed => YELLOW,
        TrustBand::Low | TrustBand::Critical => RED,
    }
}

/// A fixed-width gauge like `[########------------]` for a 0-100 score.
pub fn score_gauge(score: u32, width: usize) -> String {
    let filled = (score.min(100) as usize * width) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    )
}

/// Print a verification result to stdout.
pub fn print_result(result: &VerificationResult) {
    let color = if supports_color() {
        band_color(result.trust_band())
    } else {
        ""
    };
    let (bold, dim, cyan, reset) = if supports_color() {
        (BOLD, DIM, CYAN, RESET)
    } else {
        ("", "", "", "")
    };

    println!();
    println!(
        "{bold}Trust Score{reset}  {color}{} {}%{reset}",
        score_gauge(result.score, 20),
        result.score
    );
    println!("{bold}Verdict{reset}      {color}{}{reset}", result.verdict);
    println!("{bold}Summary{reset}      {}", result.summary);
    println!();
    println!("{bold}Verification Details{reset}");
    for line in result.details.lines() {
        println!("  {line}");
    }
    if !result.sources.is_empty() {
        println!();
        println!("{bold}Evidence & Sources{reset}");
        for source in &result.sources {
            println!("  {cyan}{}{reset}", source.title);
            println!("    {dim}{}{reset}", source.uri);
        }
    }
    println!();
    println!(
        "{dim}Analysis completed on {}{reset}",
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_is_empty_at_zero() {
        assert_eq!(score_gauge(0, 10), "[----------]");
    }

    #[test]
    fn gauge_is_full_at_hundred() {
        assert_eq!(score_gauge(100, 10), "[##########]");
    }

    #[test]
    fn gauge_clamps_runaway_scores() {
        assert_eq!(score_gauge(250, 10), "[##########]");
    }

    #[test]
    fn gauge_is_half_full_at_fifty() {
        assert_eq!(score_gauge(50, 10), "[#####-----]");
    }
}
