//! Prompt records for the free-text conversation exercise.
//!
//! A prompt bundles everything the response validator needs: the accepted
//! phrasings, the common mistakes worth a targeted correction, the keyword
//! rules that credit unscripted answers, and the fuzzy-variant policy for
//! this prompt family. The validator itself owns none of this; it is all
//! authored per prompt.

use serde::{Deserialize, Serialize};

/// A canonical accepted answer.
///
/// `text` may embed a literal `[` marker ("sou de [country]") meaning the
/// part before the bracket is a required prefix and the rest is free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptedResponse {
    /// Canonical answer text in natural spelling; normalized at match time
    pub text: String,
    /// Display form shown back to the learner
    pub display: String,
    /// Feedback shown on an exact match
    pub feedback: String,
}

/// A known wrong answer worth a targeted correction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonMistake {
    /// The mistaken phrasing in natural spelling
    pub text: String,
    /// The corrected phrasing
    pub correction: String,
    /// Why the correction applies
    pub explanation: String,
}

/// A required-words rule: hits when every keyword appears in the input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSet {
    /// All of these must appear (substring, order-independent)
    pub keywords: Vec<String>,
    /// Bonus words that make the answer sound more natural
    #[serde(default)]
    pub optional: Vec<String>,
}

/// Keyword-rule configuration for one prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Independent keyword sets; each hit counts toward `min_matches`
    pub sets: Vec<KeywordSet>,
    /// Minimum number of sets that must hit
    pub min_matches: usize,
    /// Minimum whitespace-token count of the input
    pub min_words: usize,
    /// Extra wrong-language markers for this prompt, unioned with the
    /// built-in English list
    #[serde(default)]
    pub negation: Vec<String>,
    /// Politeness/connector bonus words; when absent the built-in default
    /// list applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_optional: Option<Vec<String>>,
}

/// Declarative fuzzy-variant policy for a prompt family.
///
/// Variants are the normalized input with a declared leading phrase
/// stripped, a declared trailing phrase stripped, or both. Phrases are
/// compared against the already-normalized input, so author them in
/// normalized form: lowercase, no accents, no punctuation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuzzySpec {
    /// Leading phrases learners add that carry no meaning here (e.g. "eu ")
    #[serde(default)]
    pub strip_leading: Vec<String>,
    /// Trailing politeness tails (e.g. " obrigado", " e tu")
    #[serde(default)]
    pub strip_trailing: Vec<String>,
}

impl FuzzySpec {
    /// Expand a normalized input into its acceptable alternate phrasings.
    ///
    /// The input itself is not included; callers treat the variants as
    /// additional candidates. Phrases passed here must already be
    /// normalized the same way the input was.
    pub fn variants(&self, normalized: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut push = |candidate: &str| {
            let trimmed = candidate.trim();
            if !trimmed.is_empty() && trimmed != normalized && !out.iter().any(|v| v == trimmed) {
                out.push(trimmed.to_string());
            }
        };

        let mut stems = vec![normalized.to_string()];
        for lead in &self.strip_leading {
            let lead = lead.trim_end();
            if let Some(rest) = normalized.strip_prefix(lead) {
                // Only strip whole leading words: "eu" must not eat into "europa".
                if rest.starts_with(' ') || rest.is_empty() {
                    push(rest);
                    stems.push(rest.trim().to_string());
                }
            }
        }
        for stem in &stems {
            for tail in &self.strip_trailing {
                let tail = tail.trim_start();
                if let Some(rest) = stem.trim().strip_suffix(tail) {
                    push(rest);
                }
            }
        }
        out
    }
}

/// A conversation prompt with its full validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Prompt id (e.g. "morning-1")
    pub id: String,
    /// The question shown (and spoken) to the learner
    pub question: String,
    /// Accepted answers in priority order
    pub accepted: Vec<AcceptedResponse>,
    /// Common mistakes in priority order
    #[serde(default)]
    pub mistakes: Vec<CommonMistake>,
    /// Keyword rules for unscripted answers
    pub keywords: KeywordConfig,
    /// Fuzzy-variant policy for this prompt family
    #[serde(default)]
    pub fuzzy: FuzzySpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> FuzzySpec {
        FuzzySpec {
            strip_leading: vec!["eu ".to_string()],
            strip_trailing: vec![" obrigado".to_string(), " e tu".to_string()],
        }
    }

    #[test]
    fn strips_leading_pronoun() {
        let variants = spec().variants("eu estou bem");
        assert!(variants.contains(&"estou bem".to_string()));
    }

    #[test]
    fn strips_trailing_politeness() {
        let variants = spec().variants("estou bem obrigado");
        assert!(variants.contains(&"estou bem".to_string()));
    }

    #[test]
    fn strips_both_ends() {
        let variants = spec().variants("eu estou bem e tu");
        assert!(variants.contains(&"estou bem".to_string()));
    }

    #[test]
    fn no_variants_without_affixes() {
        assert!(spec().variants("estou bem").is_empty());
    }

    #[test]
    fn does_not_strip_mid_word() {
        // "eu" must only come off as a whole leading word: "europa" keeps its prefix
        let variants = spec().variants("europa");
        assert!(variants.is_empty());
    }
}
