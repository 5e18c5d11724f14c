//! Contact field extractors. Independent of the matching engine; each takes
//! the raw résumé text and returns what it finds, in order of appearance.

use std::sync::LazyLock;

use regex::Regex;

/// Anything non-blank around an `@`, trailing punctuation included.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+").unwrap());

/// Exactly ten digits standing alone.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{10}\b").unwrap());

/// First line of the trimmed text, trimmed. `None` when there is no text.
pub fn extract_name(text: &str) -> Option<String> {
    text.trim()
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn extract_phones(text: &str) -> Vec<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
