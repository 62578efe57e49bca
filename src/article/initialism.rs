// WHY: Initialisms are read letter by letter ("ef-bee-eye"), so the first
// letter's spoken name decides the article instead of its spelling

use anyhow::{Context, Result};
use regex_automata::meta::Regex;

/// Letter, literal dot, letter: "M.B.A.", "u.s."
const DOTTED_PATTERN: &str = r"[A-Za-z]\.[A-Za-z]";
/// Whole token is two or more ASCII capitals: "FBI", "MBA"
const ALL_CAPS_PATTERN: &str = r"^[A-Z]{2,}$";

/// Longest token the short-abbreviation fallback will consider
const SHORT_TOKEN_MAX_LEN: usize = 3;

/// Heuristic detector for tokens pronounced as a sequence of letter names
#[derive(Debug, Clone)]
pub struct InitialismDetector {
    dotted: Regex,
    all_caps: Regex,
}

impl InitialismDetector {
    pub fn new() -> Result<Self> {
        let dotted = Regex::new(DOTTED_PATTERN)
            .with_context(|| format!("Failed to compile initialism pattern: {DOTTED_PATTERN}"))?;
        let all_caps = Regex::new(ALL_CAPS_PATTERN)
            .with_context(|| format!("Failed to compile initialism pattern: {ALL_CAPS_PATTERN}"))?;
        Ok(Self { dotted, all_caps })
    }

    /// Check whether `token` is likely an initialism
    ///
    /// Any of these marks a token as an initialism:
    ///  - dot-separated letters ("M.B.A.")
    ///  - all capitals, two or more ("FBI")
    ///  - two or more capitals anywhere ("MSc")
    ///  - at most three ASCII letters starting with a capital ("Dr", "X")
    ///
    /// The last two also catch short capitalized words and camel-cased names.
    /// That misclassification is accepted.
    pub fn is_likely_initialism(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }

        if self.dotted.is_match(token) {
            return true;
        }

        if self.all_caps.is_match(token) {
            return true;
        }

        if token.chars().filter(|ch| ch.is_ascii_uppercase()).count() >= 2 {
            return true;
        }

        // WHY: ASCII-only tokens, so byte length equals letter count
        token.len() <= SHORT_TOKEN_MAX_LEN
            && token.chars().all(|ch| ch.is_ascii_alphabetic())
            && token.starts_with(|ch: char| ch.is_ascii_uppercase())
    }
}
