//! Word tokenizer feeding the phrase scanner.

use std::sync::LazyLock;

use regex::Regex;

/// A run of Unicode word characters bounded on both sides.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Lowercases `text` and splits it into word tokens, in order of appearance.
///
/// Punctuation is dropped, so "C++" yields the single token "c".
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
