//! PhraseScanner — reports every vocabulary phrase occurring in a token stream.
//!
//! # Algorithm
//! For each start index `i`, walk the trie from the root consuming
//! `tokens[i..]` while each token has a child edge. Each flagged node on the
//! way records `tokens[i..=j]` as a match. The walk for `i` stops at the first
//! token with no edge; there are no failure links.
//!
//! Cost is O(n · L) with L the longest phrase in tokens. Vocabularies here are
//! a handful of short skills, so an Aho-Corasick automaton would only matter
//! if that changes; swapping one in stays behind `scan`.

use std::collections::BTreeSet;

use crate::matching::trie::PhraseTrie;

/// Deduplicated phrases found by a scan, each rendered as space-joined tokens.
///
/// Ordered so that rendered reports are deterministic.
pub type MatchSet = BTreeSet<String>;

/// Scans `tokens` and returns all distinct vocabulary phrases found as contiguous runs.
pub fn scan<S: AsRef<str>>(tokens: &[S], trie: &PhraseTrie) -> MatchSet {
    let mut found = MatchSet::new();
    if trie.is_empty() {
        return found;
    }

    for start in 0..tokens.len() {
        let mut node = trie.root();
        for (end, token) in tokens.iter().enumerate().skip(start) {
            match node.child(token.as_ref()) {
                Some(next) => node = next,
                None => break,
            }
            if node.is_phrase_end() {
                found.insert(join_span(&tokens[start..=end]));
            }
        }
    }

    found
}

fn join_span<S: AsRef<str>>(span: &[S]) -> String {
    span.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}
