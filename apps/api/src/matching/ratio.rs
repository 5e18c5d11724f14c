//! Match ratio — how much of the required-skill list a scan covered.

use serde::{Deserialize, Serialize};

use crate::matching::scanner::MatchSet;
use crate::matching::trie::normalize_phrase;

/// Coverage of the required skills by a scan.
///
/// `matched` and `missing` keep the caller's original casing and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub matched_count: usize,
    pub required_count: usize,
    /// 0.0 – 100.0, rounded to 2 decimal digits.
    pub percent: f64,
}

/// Splits `required_skills` into found and missing against `found`.
///
/// A skill counts as matched when its normalized form (the key the trie is
/// built from) is in the match set. An empty list scores 0.0%.
pub fn compute_skill_match(found: &MatchSet, required_skills: &[String]) -> SkillMatch {
    let (matched, missing): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .cloned()
        .partition(|skill| found.contains(&normalize_phrase(skill).join(" ")));

    let matched_count = matched.len();
    let required_count = required_skills.len();

    SkillMatch {
        percent: match_percent(matched_count, required_count),
        matched,
        missing,
        matched_count,
        required_count,
    }
}

/// `matched / required * 100`, rounded half-to-even to 2 decimals; 0.0 when nothing is required.
pub fn match_percent(matched_count: usize, required_count: usize) -> f64 {
    if required_count == 0 {
        return 0.0;
    }
    let percent = matched_count as f64 / required_count as f64 * 100.0;
    (percent * 100.0).round_ties_even() / 100.0
}
