use std::sync::Arc;

use fala_content::{Corpus, PromptCatalog};
use fala_core::SearchEngine;

use crate::config::{ApiConfig, Environment};

/// Shared application state.
///
/// The corpus, prompt catalog and search engine are built once at startup
/// and shared read-only behind `Arc`s: nothing here is ever mutated after
/// construction, so concurrent requests need no locking.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub corpus: Arc<Corpus>,
    pub prompts: Arc<PromptCatalog>,
    pub engine: Arc<SearchEngine>,
    pub environment: Environment,
    pub level_test_questions: usize,
}

impl ApiState {
    /// Load the bundled content and build the search engine.
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let corpus = Corpus::bundled()?;
        let prompts = PromptCatalog::bundled()?;
        let engine = SearchEngine::new(&corpus);

        tracing::info!(
            vocabulary_categories = corpus.vocabulary.len(),
            verbs = corpus.verbs.len(),
            grammar_topics = corpus.grammar.len(),
            sayings = corpus.sayings.len(),
            prompts = prompts.all().len(),
            "content corpus loaded"
        );

        Ok(Self {
            corpus: Arc::new(corpus),
            prompts: Arc::new(prompts),
            engine: Arc::new(engine),
            environment: config.env,
            level_test_questions: config.level_test_questions,
        })
    }
}
