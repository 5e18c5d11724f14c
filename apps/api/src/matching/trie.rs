//! PhraseTrie — token-keyed trie over the skill vocabulary.
//!
//! Each edge is one lowercased token, so "Machine Learning" is stored as the
//! path `machine → learning`. A node is flagged when the path from the root
//! spells a complete vocabulary phrase. The tree is built once and then only
//! read, which lets the HTTP layer share one instance behind an `Arc`.

use std::collections::HashMap;

use tracing::debug;

/// A single trie node. Owned exclusively by its parent (or by the trie, for the root).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    children: HashMap<String, TrieNode>,
    is_phrase_end: bool,
}

impl TrieNode {
    /// Child reached by following `token`, if any.
    pub fn child(&self, token: &str) -> Option<&TrieNode> {
        self.children.get(token)
    }

    /// True when the path from the root to this node spells a vocabulary phrase.
    pub fn is_phrase_end(&self) -> bool {
        self.is_phrase_end
    }
}

/// Vocabulary of multi-token phrases, keyed token by token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PhraseTrie {
    root: TrieNode,
    len: usize,
}

impl PhraseTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie holding every phrase in `vocabulary`.
    pub fn build<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        vocabulary.into_iter().collect()
    }

    /// Inserts a phrase after lowercasing and splitting it on whitespace.
    ///
    /// Zero-token phrases are ignored: flagging the root would make every
    /// scan position match the empty string.
    pub fn insert(&mut self, phrase: &str) {
        let tokens = normalize_phrase(phrase);
        if tokens.is_empty() {
            debug!("Ignoring empty vocabulary phrase {phrase:?}");
            return;
        }

        let node = tokens.into_iter().fold(&mut self.root, |node, token| {
            node.children.entry(token).or_default()
        });
        if !node.is_phrase_end {
            node.is_phrase_end = true;
            self.len += 1;
        }
    }

    /// Whether `phrase` (normalized the same way as `insert`) is in the vocabulary.
    #[cfg(test)]
    pub fn contains(&self, phrase: &str) -> bool {
        let tokens = normalize_phrase(phrase);
        if tokens.is_empty() {
            return false;
        }
        tokens
            .iter()
            .try_fold(&self.root, |node, token| node.child(token))
            .is_some_and(TrieNode::is_phrase_end)
    }

    /// Number of distinct phrases stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}

impl<S: AsRef<str>> FromIterator<S> for PhraseTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = PhraseTrie::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for PhraseTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for phrase in iter {
            self.insert(phrase.as_ref());
        }
    }
}

/// Lowercases and whitespace-splits a phrase. No other normalization.
pub fn normalize_phrase(phrase: &str) -> Vec<String> {
    phrase
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
