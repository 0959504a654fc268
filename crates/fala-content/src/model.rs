use serde::{Deserialize, Serialize};

/// CEFR proficiency band attached to content items.
///
/// The app covers A1 through B1; ordering follows the framework so bands can
/// be compared directly (`CefrLevel::A1 < CefrLevel::B1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
}

impl std::fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A1 => write!(f, "A1"),
            Self::A2 => write!(f, "A2"),
            Self::B1 => write!(f, "B1"),
        }
    }
}

/// A single vocabulary word with its English gloss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyWord {
    /// European Portuguese form, stored in natural accented spelling
    pub portuguese: String,
    /// English gloss
    pub english: String,
    /// CEFR band this word is introduced at
    pub cefr: CefrLevel,
    /// Grammatical gender for nouns ("m" / "f"), absent for other word classes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Rough pronunciation guide (e.g. "oh-LAH")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    /// Example sentence using the word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// An ordered group of vocabulary words under one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyCategory {
    /// Category slug used in routes (e.g. "greetings")
    pub category: String,
    /// Human-readable category title
    pub title: String,
    /// Words in authoring order
    pub words: Vec<VocabularyWord>,
}

/// Verb metadata shared by every conjugation row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbMeta {
    /// English infinitive gloss (e.g. "to speak")
    pub english: String,
    /// Conjugation group (e.g. "1 (-ar)")
    pub group: String,
    /// CEFR band this verb is introduced at
    pub cefr: CefrLevel,
}

/// One row of a verb's conjugation table.
///
/// Field names mirror the source data verbatim, so the bundled JSON can be
/// regenerated from the original content exports without a translation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConjugationRow {
    /// Tense name (e.g. "Present", "Preterite", "Present Subjunctive")
    #[serde(rename = "Tense")]
    pub tense: String,
    /// Person label (e.g. "eu (I)", "tu (you)")
    #[serde(rename = "Person")]
    pub person: String,
    /// Conjugated form
    #[serde(rename = "Conjugation")]
    pub conjugation: String,
    /// Example sentence using the form
    #[serde(rename = "Example Sentence", default, skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
    /// English translation of the example sentence
    #[serde(rename = "English Translation", default, skip_serializing_if = "Option::is_none")]
    pub english_translation: Option<String>,
    /// Usage notes for this form
    #[serde(rename = "Notes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A verb with its metadata and full conjugation table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verb {
    /// Verb key, the uppercase infinitive (e.g. "FALAR")
    pub key: String,
    /// Shared metadata
    pub meta: VerbMeta,
    /// Conjugation rows in table order
    pub conjugations: Vec<ConjugationRow>,
}

/// A grammar topic page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarTopic {
    /// Topic slug used in routes (e.g. "ser-vs-estar")
    pub id: String,
    /// English title
    pub title: String,
    /// Portuguese title
    #[serde(rename = "titlePt")]
    pub title_pt: String,
    /// One-paragraph summary
    pub summary: String,
    /// CEFR band this topic is introduced at
    pub cefr: CefrLevel,
    /// Rule statements in presentation order
    pub rules: Vec<String>,
}

/// A saying or cultural expression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Saying {
    /// The expression in Portuguese
    pub portuguese: String,
    /// Idiomatic English equivalent
    pub english: String,
    /// Word-for-word rendering, when it differs from the idiomatic one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    /// Usage note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Target accuracy required to pass a level test at one sub-level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelTarget {
    /// Sub-level code (e.g. "A1.1")
    pub level: String,
    /// Accuracy in [0, 1] required to advance past this sub-level
    #[serde(rename = "targetAccuracy")]
    pub target_accuracy: f64,
}

/// The full static content corpus.
///
/// Loaded once at startup and never mutated afterwards; every consumer holds
/// it behind an `Arc` and reads concurrently without locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    /// Vocabulary grouped by category, categories and words in authoring order
    pub vocabulary: Vec<VocabularyCategory>,
    /// Verbs in authoring order
    pub verbs: Vec<Verb>,
    /// Grammar topics in authoring order
    pub grammar: Vec<GrammarTopic>,
    /// Sayings in authoring order
    pub sayings: Vec<Saying>,
    /// Per-sub-level pass targets for level tests
    pub levels: Vec<LevelTarget>,
}

impl Corpus {
    /// Look up a verb by key, case-insensitively.
    pub fn verb(&self, key: &str) -> Option<&Verb> {
        self.verbs.iter().find(|v| v.key.eq_ignore_ascii_case(key))
    }

    /// Look up a vocabulary category by slug.
    pub fn category(&self, slug: &str) -> Option<&VocabularyCategory> {
        self.vocabulary.iter().find(|c| c.category == slug)
    }

    /// Look up a grammar topic by id.
    pub fn grammar_topic(&self, id: &str) -> Option<&GrammarTopic> {
        self.grammar.iter().find(|t| t.id == id)
    }

    /// Configured target accuracy for a sub-level code, if present.
    pub fn level_target(&self, code: &str) -> Option<f64> {
        self.levels
            .iter()
            .find(|t| t.level == code)
            .map(|t| t.target_accuracy)
    }
}
