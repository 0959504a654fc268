//! In-memory search over the bundled content corpus.
//!
//! The engine flattens the corpus once at construction into uniform lookup
//! entries with pre-normalized fields; every query after that is a pure,
//! deterministic scan. No indexes, no persistence: the corpus is a few
//! hundred records and a linear pass is instantaneous.

mod card;
mod intent;

pub use card::{ComparisonSide, FormPreview, SmartCard, VerbPreview};
pub use intent::{Intent, TenseQuery};

use serde::{Deserialize, Serialize};

use fala_content::{Corpus, GrammarTopic, Saying, Verb, VocabularyWord};

use crate::normalize::normalize;

/// Content type of a general search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Vocabulary,
    Verb,
    Conjugation,
    Grammar,
    Saying,
}

/// A display projection of one matching content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Content type, used for grouping in the UI
    #[serde(rename = "type")]
    pub result_type: ResultType,
    /// Primary display line
    pub title: String,
    /// Secondary display line
    pub subtitle: String,
    /// Detail page for this item
    pub href: String,
    /// Pronunciation guide, when the item has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

/// Everything a search query produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked general results
    pub results: Vec<SearchResult>,
    /// Best direct answer, when one intent resolved cleanly
    pub smart_card: Option<SmartCard>,
}

/// Match quality tiers; lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tier {
    Exact,
    Prefix,
    Contains,
}

fn tier(candidate: &str, query: &str) -> Option<Tier> {
    if candidate == query {
        Some(Tier::Exact)
    } else if candidate.starts_with(query) {
        Some(Tier::Prefix)
    } else if candidate.contains(query) {
        Some(Tier::Contains)
    } else {
        None
    }
}

fn best_tier<'a>(fields: impl IntoIterator<Item = &'a str>, query: &str) -> Option<Tier> {
    fields.into_iter().filter_map(|f| tier(f, query)).min()
}

struct VocabEntry {
    category: String,
    word: VocabularyWord,
    norm_pt: String,
    norm_en: String,
}

struct VerbEntry {
    verb: Verb,
    norm_key: String,
    norm_en: String,
    /// (row index, normalized form), in table order
    forms: Vec<(usize, String)>,
}

struct GrammarEntry {
    topic: GrammarTopic,
    norm_title: String,
    norm_title_pt: String,
}

struct SayingEntry {
    saying: Saying,
    norm_pt: String,
    norm_en: String,
}

/// The search engine. Construct once per corpus, share behind an `Arc`,
/// query from as many tasks as you like: it is all `&self` reads.
pub struct SearchEngine {
    vocab: Vec<VocabEntry>,
    verbs: Vec<VerbEntry>,
    grammar: Vec<GrammarEntry>,
    sayings: Vec<SayingEntry>,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("vocab", &self.vocab.len())
            .field("verbs", &self.verbs.len())
            .field("grammar", &self.grammar.len())
            .field("sayings", &self.sayings.len())
            .finish()
    }
}

impl SearchEngine {
    /// Flatten the corpus into lookup entries. This is the only setup cost;
    /// it happens once and is reused for every query.
    pub fn new(corpus: &Corpus) -> Self {
        let vocab = corpus
            .vocabulary
            .iter()
            .flat_map(|cat| {
                cat.words.iter().map(move |word| VocabEntry {
                    category: cat.category.clone(),
                    word: word.clone(),
                    norm_pt: normalize(&word.portuguese),
                    norm_en: normalize(&word.english),
                })
            })
            .collect();

        let verbs = corpus
            .verbs
            .iter()
            .map(|verb| VerbEntry {
                norm_key: normalize(&verb.key),
                norm_en: normalize(&verb.meta.english),
                forms: verb
                    .conjugations
                    .iter()
                    .enumerate()
                    .map(|(i, row)| (i, normalize(&row.conjugation)))
                    .collect(),
                verb: verb.clone(),
            })
            .collect();

        let grammar = corpus
            .grammar
            .iter()
            .map(|topic| GrammarEntry {
                norm_title: normalize(&topic.title),
                norm_title_pt: normalize(&topic.title_pt),
                topic: topic.clone(),
            })
            .collect();

        let sayings = corpus
            .sayings
            .iter()
            .map(|saying| SayingEntry {
                norm_pt: normalize(&saying.portuguese),
                norm_en: normalize(&saying.english),
                saying: saying.clone(),
            })
            .collect();

        Self { vocab, verbs, grammar, sayings }
    }

    /// Run a query: general ranked results plus an optional smart card.
    ///
    /// Precondition (enforced by the HTTP layer, not here): the trimmed
    /// query is at least 2 characters. Fully deterministic for a given
    /// corpus and query.
    pub fn search(&self, query: &str) -> SearchResponse {
        let smart_card = self.smart_card(query);
        let normalized = normalize(query);
        let results = if normalized.is_empty() {
            Vec::new()
        } else {
            self.ranked_results(&normalized)
        };
        SearchResponse { results, smart_card }
    }

    /// Scan all content types in a fixed order, keep substring matches, and
    /// rank exact < prefix < contains. The sort is stable, so equal-tier
    /// results keep first-seen corpus order (and therefore group by type).
    fn ranked_results(&self, query: &str) -> Vec<SearchResult> {
        let mut scored: Vec<(Tier, SearchResult)> = Vec::new();

        for entry in &self.vocab {
            if let Some(t) = best_tier([entry.norm_pt.as_str(), entry.norm_en.as_str()], query) {
                scored.push((
                    t,
                    SearchResult {
                        result_type: ResultType::Vocabulary,
                        title: entry.word.portuguese.clone(),
                        subtitle: entry.word.english.clone(),
                        href: format!("/vocabulary/{}", entry.category),
                        pronunciation: entry.word.pronunciation.clone(),
                    },
                ));
            }
        }

        for entry in &self.verbs {
            if let Some(t) = best_tier([entry.norm_key.as_str(), entry.norm_en.as_str()], query) {
                scored.push((
                    t,
                    SearchResult {
                        result_type: ResultType::Verb,
                        title: entry.verb.key.clone(),
                        subtitle: entry.verb.meta.english.clone(),
                        href: verb_href(&entry.verb.key),
                        pronunciation: None,
                    },
                ));
            }
        }

        for entry in &self.verbs {
            for (row_idx, norm_form) in &entry.forms {
                if let Some(t) = tier(norm_form, query) {
                    let row = &entry.verb.conjugations[*row_idx];
                    scored.push((
                        t,
                        SearchResult {
                            result_type: ResultType::Conjugation,
                            title: row.conjugation.clone(),
                            subtitle: format!(
                                "{} · {} · {}",
                                entry.verb.key, row.tense, row.person
                            ),
                            href: verb_href(&entry.verb.key),
                            pronunciation: None,
                        },
                    ));
                }
            }
        }

        for entry in &self.grammar {
            if let Some(t) =
                best_tier([entry.norm_title.as_str(), entry.norm_title_pt.as_str()], query)
            {
                scored.push((
                    t,
                    SearchResult {
                        result_type: ResultType::Grammar,
                        title: entry.topic.title.clone(),
                        subtitle: entry.topic.title_pt.clone(),
                        href: format!("/grammar/{}", entry.topic.id),
                        pronunciation: None,
                    },
                ));
            }
        }

        for entry in &self.sayings {
            if let Some(t) = best_tier([entry.norm_pt.as_str(), entry.norm_en.as_str()], query) {
                scored.push((
                    t,
                    SearchResult {
                        result_type: ResultType::Saying,
                        title: entry.saying.portuguese.clone(),
                        subtitle: entry.saying.english.clone(),
                        href: "/sayings".to_string(),
                        pronunciation: None,
                    },
                ));
            }
        }

        scored.sort_by_key(|(t, _)| *t);
        scored.into_iter().map(|(_, r)| r).collect()
    }

    // --- Smart cards ---

    fn smart_card(&self, query: &str) -> Option<SmartCard> {
        match intent::classify(query) {
            Intent::Translation { term } => self.translation_card(&term),
            Intent::Definition { term } => self.definition_card(&term),
            Intent::Conjugation { term } => self.conjugation_card(&term),
            Intent::Tense { tense, term } => self.tense_card(tense, &term),
            Intent::Comparison { left, right } => self.comparison_card(query, &left, &right),
            Intent::Bare { term } => self.bare_card(&term),
        }
    }

    /// Verbs whose infinitive or English gloss equals the term. All equal
    /// matches are returned; the caller escalates to a `_multi` card when
    /// there is more than one.
    fn resolve_verbs(&self, norm_term: &str) -> Vec<&VerbEntry> {
        if norm_term.is_empty() {
            return Vec::new();
        }
        self.verbs
            .iter()
            .filter(|v| {
                v.norm_key == norm_term
                    || v.norm_en == norm_term
                    || v.norm_en.strip_prefix("to ") == Some(norm_term)
            })
            .collect()
    }

    fn translation_card(&self, term: &str) -> Option<SmartCard> {
        let t = normalize(term);
        if t.is_empty() {
            return None;
        }
        if let Some(entry) = self.vocab.iter().find(|e| e.norm_en == t) {
            return Some(SmartCard::Translation {
                term: term.trim().to_string(),
                portuguese: entry.word.portuguese.clone(),
                english: entry.word.english.clone(),
                pronunciation: entry.word.pronunciation.clone(),
                href: format!("/vocabulary/{}", entry.category),
            });
        }
        // An English verb gloss answers with the verb itself.
        self.verb_card_for(&t, term)
    }

    fn definition_card(&self, term: &str) -> Option<SmartCard> {
        let t = normalize(term);
        if t.is_empty() {
            return None;
        }
        if let Some(entry) = self.vocab.iter().find(|e| e.norm_pt == t) {
            return Some(SmartCard::Definition {
                term: term.trim().to_string(),
                portuguese: entry.word.portuguese.clone(),
                english: entry.word.english.clone(),
                example: entry.word.example.clone(),
                href: format!("/vocabulary/{}", entry.category),
            });
        }
        if self.verbs.iter().any(|v| v.norm_key == t) {
            return self.verb_card_for(&t, term);
        }
        self.grammar_card_for(&t)
    }

    fn conjugation_card(&self, term: &str) -> Option<SmartCard> {
        self.verb_card_for(&normalize(term), term)
    }

    /// Single verb -> `conjugation` card; several -> `conjugation_multi`.
    fn verb_card_for(&self, norm_term: &str, raw_term: &str) -> Option<SmartCard> {
        let matches = self.resolve_verbs(norm_term);
        match matches.as_slice() {
            [] => None,
            [entry] => Some(SmartCard::Conjugation {
                infinitive: entry.verb.key.clone(),
                english: entry.verb.meta.english.clone(),
                group: entry.verb.meta.group.clone(),
                cefr: entry.verb.meta.cefr,
                present_preview: present_preview(&entry.verb),
                href: verb_href(&entry.verb.key),
            }),
            _ => Some(SmartCard::ConjugationMulti {
                term: raw_term.trim().to_string(),
                matches: matches.iter().map(|e| verb_preview(&e.verb)).collect(),
            }),
        }
    }

    fn tense_card(&self, tense: TenseQuery, term: &str) -> Option<SmartCard> {
        let matches = self.resolve_verbs(&normalize(term));
        match matches.as_slice() {
            [] => None,
            [entry] => {
                let forms: Vec<FormPreview> = entry
                    .verb
                    .conjugations
                    .iter()
                    .filter(|row| tense.matches_row(&row.tense))
                    .map(|row| FormPreview {
                        person: row.person.clone(),
                        conjugation: row.conjugation.clone(),
                    })
                    .collect();
                // No rows for this tense: no card beats a misleading empty one.
                if forms.is_empty() {
                    return None;
                }
                Some(SmartCard::Tense {
                    infinitive: entry.verb.key.clone(),
                    tense: tense.label().to_string(),
                    forms,
                    href: verb_href(&entry.verb.key),
                })
            }
            _ => Some(SmartCard::TenseMulti {
                term: term.trim().to_string(),
                tense: tense.label().to_string(),
                matches: matches.iter().map(|e| verb_preview(&e.verb)).collect(),
            }),
        }
    }

    fn comparison_card(&self, raw_query: &str, left: &str, right: &str) -> Option<SmartCard> {
        // A grammar topic titled like the whole query ("Ser vs. Estar") is
        // the better direct answer than a synthesized side-by-side.
        if let Some(card) = self.grammar_card_for(&normalize(raw_query)) {
            return Some(card);
        }
        let left = self.comparison_side(&normalize(left))?;
        let right = self.comparison_side(&normalize(right))?;
        Some(SmartCard::Comparison { left, right })
    }

    /// Resolve one comparison side to a single entity. An ambiguous side
    /// (several verbs) yields nothing rather than an arbitrary pick.
    fn comparison_side(&self, norm_term: &str) -> Option<ComparisonSide> {
        let verbs = self.resolve_verbs(norm_term);
        if let [entry] = verbs.as_slice() {
            return Some(ComparisonSide {
                title: entry.verb.key.clone(),
                english: entry.verb.meta.english.clone(),
                href: verb_href(&entry.verb.key),
            });
        }
        if verbs.len() > 1 {
            return None;
        }
        self.vocab.iter().find(|e| e.norm_pt == norm_term).map(|entry| ComparisonSide {
            title: entry.word.portuguese.clone(),
            english: entry.word.english.clone(),
            href: format!("/vocabulary/{}", entry.category),
        })
    }

    fn grammar_card_for(&self, norm_term: &str) -> Option<SmartCard> {
        if norm_term.is_empty() {
            return None;
        }
        self.grammar
            .iter()
            .find(|e| e.norm_title == norm_term || e.norm_title_pt == norm_term)
            .map(|entry| SmartCard::Grammar {
                id: entry.topic.id.clone(),
                title: entry.topic.title.clone(),
                title_pt: entry.topic.title_pt.clone(),
                summary: entry.topic.summary.clone(),
                cefr: entry.topic.cefr,
                href: format!("/grammar/{}", entry.topic.id),
            })
    }

    /// Bare queries only produce a card on an exact entity match.
    fn bare_card(&self, term: &str) -> Option<SmartCard> {
        let t = normalize(term);
        if t.is_empty() {
            return None;
        }
        if let Some(card) = self.verb_card_for(&t, term) {
            return Some(card);
        }
        if let Some(entry) = self.vocab.iter().find(|e| e.norm_pt == t) {
            return Some(SmartCard::Definition {
                term: term.trim().to_string(),
                portuguese: entry.word.portuguese.clone(),
                english: entry.word.english.clone(),
                example: entry.word.example.clone(),
                href: format!("/vocabulary/{}", entry.category),
            });
        }
        if let Some(entry) = self.vocab.iter().find(|e| e.norm_en == t) {
            return Some(SmartCard::Translation {
                term: term.trim().to_string(),
                portuguese: entry.word.portuguese.clone(),
                english: entry.word.english.clone(),
                pronunciation: entry.word.pronunciation.clone(),
                href: format!("/vocabulary/{}", entry.category),
            });
        }
        self.grammar_card_for(&t)
    }
}

fn verb_href(key: &str) -> String {
    format!("/verbs/{}", key.to_lowercase())
}

fn present_preview(verb: &Verb) -> String {
    verb.conjugations
        .iter()
        .filter(|row| row.tense.eq_ignore_ascii_case("present"))
        .map(|row| row.conjugation.as_str())
        .collect::<Vec<_>>()
        .join(" · ")
}

fn verb_preview(verb: &Verb) -> VerbPreview {
    VerbPreview {
        infinitive: verb.key.clone(),
        english: verb.meta.english.clone(),
        present_preview: present_preview(verb),
        href: verb_href(&verb.key),
    }
}
