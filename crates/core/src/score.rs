//! Best-effort extraction of a "<n>/10" score token from model feedback.
//!
//! Kept as a pure function so the scoring path can be tested without any
//! network or UI concern.

use once_cell::sync::Lazy;
use regex::Regex;

/// Score assigned when feedback carries no parsable "<n>/10" token.
pub const DEFAULT_SCORE: u32 = 7;

static SCORE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)/10").expect("score pattern should compile"));

/// Scans `feedback` for the first `<digits>/10` substring and parses the digits.
///
/// The value is intentionally not clamped: a response like "15/10" yields 15.
/// Returns `None` when no token matches or the digits overflow `u32`.
#[must_use]
pub fn extract_score(feedback: &str) -> Option<u32> {
    SCORE_TOKEN
        .captures(feedback)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Extraction with the fixed fallback applied.
#[must_use]
pub fn score_or_default(feedback: &str) -> u32 {
    extract_score(feedback).unwrap_or(DEFAULT_SCORE)
}
