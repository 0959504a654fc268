//! Static content for the FALA European Portuguese practice API.
//!
//! This crate owns the data model for the bundled corpus (vocabulary, verb
//! conjugation tables, grammar topics, sayings, level targets) and the
//! conversation prompts, plus the loaders that turn the bundled JSON into
//! typed, immutable structures at startup.

pub mod model;
pub mod prompt;

pub use model::{
    CefrLevel, ConjugationRow, Corpus, GrammarTopic, LevelTarget, Saying, Verb, VerbMeta,
    VocabularyCategory, VocabularyWord,
};
pub use prompt::{AcceptedResponse, CommonMistake, FuzzySpec, KeywordConfig, KeywordSet, Prompt};

use thiserror::Error;

/// Errors raised while loading content.
///
/// These only ever surface at startup (or in tooling); once loaded the
/// corpus is immutable and infallible to read.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
}

fn parse<T: serde::de::DeserializeOwned>(file: &'static str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { file, source })
}

impl Corpus {
    /// Deserialize the corpus bundled into this crate at compile time.
    pub fn bundled() -> Result<Self, ContentError> {
        Ok(Self {
            vocabulary: parse("vocabulary.json", include_str!("../data/vocabulary.json"))?,
            verbs: parse("verbs.json", include_str!("../data/verbs.json"))?,
            grammar: parse("grammar.json", include_str!("../data/grammar.json"))?,
            sayings: parse("sayings.json", include_str!("../data/sayings.json"))?,
            levels: parse("levels.json", include_str!("../data/levels.json"))?,
        })
    }

    /// Deserialize a whole corpus from a single JSON document.
    ///
    /// Used by tests and tooling that work against external content files.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, ContentError> {
        serde_json::from_reader(reader).map_err(|source| ContentError::Parse {
            file: "<reader>",
            source,
        })
    }
}

/// The bundled conversation prompts, looked up by id.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    prompts: Vec<Prompt>,
}

impl PromptCatalog {
    /// Deserialize the prompt set bundled into this crate at compile time.
    pub fn bundled() -> Result<Self, ContentError> {
        let prompts = parse("prompts.json", include_str!("../data/prompts.json"))?;
        Ok(Self { prompts })
    }

    /// All prompts in authoring order.
    pub fn all(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Look up a prompt by id.
    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_corpus_loads() {
        let corpus = Corpus::bundled().expect("bundled corpus should parse");
        assert!(!corpus.vocabulary.is_empty());
        assert!(!corpus.verbs.is_empty());
        assert!(!corpus.grammar.is_empty());
        assert!(!corpus.sayings.is_empty());
        assert_eq!(corpus.levels.len(), 15);
    }

    #[test]
    fn bundled_prompts_load() {
        let catalog = PromptCatalog::bundled().expect("bundled prompts should parse");
        assert!(catalog.get("morning-1").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn verb_lookup_is_case_insensitive() {
        let corpus = Corpus::bundled().unwrap();
        assert!(corpus.verb("falar").is_some());
        assert!(corpus.verb("FALAR").is_some());
    }

    #[test]
    fn conjugation_rows_keep_source_field_names() {
        let corpus = Corpus::bundled().unwrap();
        let falar = corpus.verb("FALAR").unwrap();
        let row = &falar.conjugations[0];
        let json = serde_json::to_value(row).unwrap();
        assert!(json.get("Tense").is_some());
        assert!(json.get("Person").is_some());
        assert!(json.get("Conjugation").is_some());
    }
}
