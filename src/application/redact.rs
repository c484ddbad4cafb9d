//! Credential scrubbing for anything written to a terminal or log.
//!
//! Both passes are textual. They are log hygiene, not a security boundary.

use once_cell::sync::Lazy;
use regex::Regex;

/// Replacement for token-shaped substrings.
pub const REDACTED_TOKEN: &str = "<REDACTED_JWT>";

// Whole `<input>` elements carrying a `...JWT` field with a value.
static JWT_INPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<input\b[^>]*\bname=["'][a-z]+JWT["'][^>]*\bvalue=["'][^"']+["'][^>]*>"#)
        .expect("jwt input pattern is valid")
});

// Segments are maximal runs of the token alphabet: `.` is outside the class, a
// leftmost match always starts at the beginning of a run and the greedy last
// segment always runs to its end, so matches are bounded on both sides.
static JWT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}")
        .expect("jwt token pattern is valid")
});

/// Strip JWT form fields, then mask any remaining token-shaped substrings.
///
/// Both passes are re-applied until nothing changes, so `redact(redact(s))`
/// always equals `redact(s)`. Every effective pass shortens the text, which
/// bounds the loop.
pub fn redact(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let stripped = JWT_INPUT.replace_all(&current, "");
        let masked = JWT_TOKEN.replace_all(&stripped, REDACTED_TOKEN);
        if masked == current.as_str() {
            return current;
        }
        current = masked.into_owned();
    }
}
