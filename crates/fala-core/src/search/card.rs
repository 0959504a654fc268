//! Smart-card payloads: a single synthesized best direct answer, rendered
//! above the general results.

use serde::{Deserialize, Serialize};

use fala_content::CefrLevel;

/// A compact per-verb preview used by the `_multi` disambiguation variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbPreview {
    /// Uppercase infinitive key
    pub infinitive: String,
    /// English gloss
    pub english: String,
    /// Present-tense forms joined for one-glance display
    pub present_preview: String,
    /// Detail page for this verb
    pub href: String,
}

/// One conjugated form inside a tense card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormPreview {
    /// Person label as authored (e.g. "eu (I)")
    pub person: String,
    /// The conjugated form
    pub conjugation: String,
}

/// One side of a comparison card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSide {
    /// The entity's display title (infinitive or word)
    pub title: String,
    /// English gloss
    pub english: String,
    /// Detail page for this entity
    pub href: String,
}

/// The best-guess direct answer for a query, keyed by intent.
///
/// Every variant is denormalized: it carries exactly the fields needed to
/// render a one-glance answer plus an `href` to the full page. When more
/// than one entity matches equally well, the `_multi` variants list all of
/// them; the engine never picks one arbitrarily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SmartCard {
    /// English term resolved to its Portuguese form
    Translation {
        term: String,
        portuguese: String,
        english: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pronunciation: Option<String>,
        href: String,
    },
    /// Portuguese term resolved to its English gloss
    Definition {
        term: String,
        portuguese: String,
        english: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        example: Option<String>,
        href: String,
    },
    /// A single verb with a present-tense preview
    Conjugation {
        infinitive: String,
        english: String,
        group: String,
        cefr: CefrLevel,
        present_preview: String,
        href: String,
    },
    /// Several verbs matched the query equally well
    ConjugationMulti { term: String, matches: Vec<VerbPreview> },
    /// A single verb's forms in one requested tense
    Tense {
        infinitive: String,
        tense: String,
        forms: Vec<FormPreview>,
        href: String,
    },
    /// Several verbs matched a tense query equally well
    TenseMulti {
        term: String,
        tense: String,
        matches: Vec<VerbPreview>,
    },
    /// Two entities side by side
    Comparison { left: ComparisonSide, right: ComparisonSide },
    /// A grammar topic answering the query directly
    Grammar {
        id: String,
        title: String,
        title_pt: String,
        summary: String,
        cefr: CefrLevel,
        href: String,
    },
}
