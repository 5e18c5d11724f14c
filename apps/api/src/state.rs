use std::sync::Arc;

use crate::config::Config;
use crate::matching::PhraseTrie;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Trie over `config.required_skills`, built once at startup and only read afterwards.
    pub default_trie: Arc<PhraseTrie>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let default_trie = Arc::new(PhraseTrie::build(&config.required_skills));
        Self {
            config,
            default_trie,
        }
    }
}
