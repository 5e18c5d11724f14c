// Phrase matching engine: tokenizer → trie → scan → match ratio.
// Everything here is synchronous and allocation-light; no I/O.

pub mod ratio;
pub mod scanner;
pub mod tokenizer;
pub mod trie;

pub use ratio::{compute_skill_match, SkillMatch};
pub use scanner::{scan, MatchSet};
pub use tokenizer::tokenize;
pub use trie::PhraseTrie;
