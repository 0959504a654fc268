//! Free-text response validation for conversation prompts.
//!
//! Classifies a learner's typed answer against a prompt's accepted
//! responses, common mistakes and keyword rules, in strict priority order.
//! The validator is a total function: malformed configuration degrades to
//! "never matches" and the absence of any rule is the normal `unknown`
//! outcome, never an error. `unknown` must not tell the learner they are
//! wrong; the accepted-phrasing corpus is known to be incomplete.

use serde::{Deserialize, Serialize};

use fala_content::{AcceptedResponse, CommonMistake, KeywordConfig};

use crate::normalize::normalize;

/// Minimum normalized length for the placeholder-prefix form of an accepted
/// response ("sou de [country]"). Guards against accidental matches on very
/// short prefixes. Heuristic threshold; revisit if content grows legitimate
/// shorter prefixes.
pub const MIN_PREFIX_CHARS: usize = 4;

/// English markers used by the wrong-language guard. Multi-word entries are
/// checked as substrings of the normalized input; single words must match a
/// whole token. "no", "do" and "a" are deliberately absent: they are common
/// European Portuguese words (no = em + o, do = de + o).
const NEGATION_BUILTINS: &[&str] = &[
    "i am", "i m", "it is", "what is", "how do", "i think", "thank you",
    "hello", "hi", "what", "why", "when", "where", "who", "yes", "because",
    "the", "is", "are", "and", "you", "english",
];

/// Default politeness/connector bonus words, already normalized. A prompt's
/// `global_optional` replaces this list entirely when present.
const GLOBAL_OPTIONAL_DEFAULTS: &[&str] = &[
    "por favor",
    "obrigado",
    "obrigada",
    "desculpe",
    "se faz favor",
    "e tu",
    "contigo",
    "muito",
    "tambem",
];

/// Classification of a validated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Matched an accepted response verbatim (or via its prefix placeholder)
    Exact,
    /// Credited through the keyword rules
    Keyword,
    /// Matched a known common mistake
    Mistake,
    /// Some keywords present but below the credit thresholds
    Partial,
    /// Nothing recognized; not a claim of wrongness
    Unknown,
}

/// The feedback payload rendered after validation. Transient: built per
/// call, shown once, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Classification
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    /// Display form: the matched record's display, or the raw input for
    /// keyword credits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Feedback line for the learner
    pub feedback: String,
    /// Corrected phrasing, for mistakes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
    /// Why the correction applies, for mistakes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Up to 3 example answers the learner could try
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl ValidationResult {
    fn unknown(feedback: impl Into<String>, examples: Vec<String>) -> Self {
        Self {
            kind: ResponseKind::Unknown,
            display: None,
            feedback: feedback.into(),
            correction: None,
            explanation: None,
            examples,
        }
    }
}

/// Validate a learner's free-text answer against one prompt's configuration.
///
/// `fuzzy` supplies alternate acceptable phrasings of the normalized input
/// (e.g. with a leading subject pronoun or a trailing politeness tail
/// stripped). The policy is per-prompt and injected; the validator owns
/// none of it.
///
/// The rules run in strict priority order (exact accepted match, common
/// mistake, wrong-language guard, keyword credit, partial, unknown) and
/// the first that fires wins.
pub fn validate<F>(
    input: &str,
    accepted: &[AcceptedResponse],
    mistakes: &[CommonMistake],
    config: &KeywordConfig,
    fuzzy: F,
) -> ValidationResult
where
    F: Fn(&str) -> Vec<String>,
{
    let normalized = normalize(input);
    if normalized.is_empty() {
        return ValidationResult::unknown(String::new(), Vec::new());
    }

    let mut candidates = vec![normalized.clone()];
    candidates.extend(fuzzy(&normalized));

    // 1. Exact accepted-response match (including prefix placeholders).
    for resp in accepted {
        if matches_accepted(resp, &candidates) {
            return ValidationResult {
                kind: ResponseKind::Exact,
                display: Some(resp.display.clone()),
                feedback: resp.feedback.clone(),
                correction: None,
                explanation: None,
                examples: Vec::new(),
            };
        }
    }

    // 2. Exact common-mistake match. Equality only: a mistake is a specific
    // phrasing, never a prefix pattern.
    for mistake in mistakes {
        let target = normalize(&mistake.text);
        if !target.is_empty() && candidates.iter().any(|c| *c == target) {
            let feedback = if mistake.correction.is_empty() {
                "Almost!".to_string()
            } else {
                format!("Almost! Try: {}", mistake.correction)
            };
            return ValidationResult {
                kind: ResponseKind::Mistake,
                display: None,
                feedback,
                correction: Some(mistake.correction.clone()),
                explanation: Some(mistake.explanation.clone()),
                examples: Vec::new(),
            };
        }
    }

    let words: Vec<&str> = normalized.split_whitespace().collect();

    // 3. Wrong-language guard.
    let negation_hits = count_negation_hits(&normalized, &words, &config.negation);
    if negation_hits >= 2 || (words.len() <= 3 && negation_hits >= 1) {
        return ValidationResult::unknown(
            "That looks like English. Try answering in Portuguese, maybe one of these:",
            example_displays(accepted, 3),
        );
    }

    // 4. Keyword-set matching.
    let mut match_count = 0usize;
    let mut bonus = 0usize;
    for set in &config.sets {
        if set.keywords.is_empty() {
            // Malformed set: never matches.
            continue;
        }
        let hit = set.keywords.iter().all(|k| {
            let k = normalize(k);
            !k.is_empty() && normalized.contains(&k)
        });
        if hit {
            match_count += 1;
            bonus += set
                .optional
                .iter()
                .filter(|o| {
                    let o = normalize(o);
                    !o.is_empty() && normalized.contains(&o)
                })
                .count();
        }
    }
    bonus += global_bonus(&normalized, config.global_optional.as_deref());

    if match_count >= config.min_matches && words.len() >= config.min_words {
        let feedback = if bonus >= 3 {
            "Fantástico! That sounded completely natural."
        } else if bonus >= 1 {
            "Muito bem! The extra detail makes it sound natural."
        } else {
            "Boa! That works."
        };
        return ValidationResult {
            kind: ResponseKind::Keyword,
            // The learner's own words, untouched.
            display: Some(input.to_string()),
            feedback: feedback.to_string(),
            correction: None,
            explanation: None,
            examples: Vec::new(),
        };
    }

    // 5. Partial credit.
    if match_count > 0 {
        if words.len() < 2 && match_count < 2 {
            // Too short to credit a single hit.
            return ValidationResult::unknown(
                "That's a bit short for me to be sure. Try a fuller answer like:",
                example_displays(accepted, 3),
            );
        }
        return ValidationResult {
            kind: ResponseKind::Partial,
            display: None,
            feedback: "You're on the right track! Try something closer to:".to_string(),
            correction: None,
            explanation: None,
            examples: example_displays(accepted, 2),
        };
    }

    // 6. Fallback. Never claims the answer is wrong, only unrecognized.
    ValidationResult::unknown(
        "I don't recognize that one (it may still be fine!). Here are a few ways you could answer:",
        example_displays(accepted, 3),
    )
}

/// Exact or prefix-placeholder match of one accepted response against the
/// input and its fuzzy variants.
fn matches_accepted(resp: &AcceptedResponse, candidates: &[String]) -> bool {
    match resp.text.find('[') {
        Some(idx) => {
            let prefix = normalize(&resp.text[..idx]);
            prefix.chars().count() >= MIN_PREFIX_CHARS
                && candidates.iter().any(|c| c.starts_with(&prefix))
        }
        None => {
            let target = normalize(&resp.text);
            !target.is_empty() && candidates.iter().any(|c| *c == target)
        }
    }
}

/// Count wrong-language markers in the input: built-in English list plus the
/// prompt's own additions. Multi-word entries match as substrings, single
/// words as whole tokens.
fn count_negation_hits(normalized: &str, words: &[&str], extra: &[String]) -> usize {
    let extra_normalized: Vec<String> = extra.iter().map(|e| normalize(e)).collect();
    NEGATION_BUILTINS
        .iter()
        .copied()
        .chain(extra_normalized.iter().map(String::as_str))
        .filter(|entry| !entry.is_empty())
        .filter(|entry| {
            if entry.contains(' ') {
                normalized.contains(entry)
            } else {
                words.iter().any(|w| w == entry)
            }
        })
        .count()
}

/// Bonus count from the politeness/connector list.
fn global_bonus(normalized: &str, overridden: Option<&[String]>) -> usize {
    match overridden {
        Some(list) => list
            .iter()
            .map(|g| normalize(g))
            .filter(|g| !g.is_empty() && normalized.contains(g.as_str()))
            .count(),
        None => GLOBAL_OPTIONAL_DEFAULTS
            .iter()
            .filter(|g| normalized.contains(*g))
            .count(),
    }
}

/// Up to `limit` display strings from non-placeholder accepted responses.
fn example_displays(accepted: &[AcceptedResponse], limit: usize) -> Vec<String> {
    accepted
        .iter()
        .filter(|r| !r.text.contains('['))
        .take(limit)
        .map(|r| r.display.clone())
        .collect()
}
