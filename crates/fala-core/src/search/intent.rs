//! Query intent classification for the smart-card layer.
//!
//! Cheap pattern checks against the raw query decide whether a direct
//! answer should even be attempted. Classification yields exactly one
//! intent; whether it resolves to a card is the engine's call.

use std::sync::LazyLock;

use regex::Regex;

/// A tense the user can ask about directly. Present is not here: asking for
/// a verb without a tense already previews the present forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenseQuery {
    Preterite,
    Imperfect,
    Future,
    Conditional,
    Subjunctive,
}

impl TenseQuery {
    fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "past" | "preterite" => Some(Self::Preterite),
            "imperfect" => Some(Self::Imperfect),
            "future" => Some(Self::Future),
            "conditional" => Some(Self::Conditional),
            "subjunctive" => Some(Self::Subjunctive),
            _ => None,
        }
    }

    /// Display label, matching the tense names used in conjugation rows.
    pub fn label(self) -> &'static str {
        match self {
            Self::Preterite => "Preterite",
            Self::Imperfect => "Imperfect",
            Self::Future => "Future",
            Self::Conditional => "Conditional",
            Self::Subjunctive => "Subjunctive",
        }
    }

    /// Whether a conjugation row's tense field belongs to this query.
    /// Substring match so "Present Subjunctive" answers "subjunctive".
    pub fn matches_row(self, row_tense: &str) -> bool {
        row_tense
            .to_ascii_lowercase()
            .contains(&self.label().to_ascii_lowercase())
    }
}

/// The single candidate intent extracted from a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// "how do you say X": an English term looking for its Portuguese form
    Translation { term: String },
    /// "what does X mean": a Portuguese term looking for its gloss
    Definition { term: String },
    /// "conjugate X"
    Conjugation { term: String },
    /// "past of X", "X in the future tense"
    Tense { tense: TenseQuery, term: String },
    /// "X vs Y"
    Comparison { left: String, right: String },
    /// Anything else: the trimmed query itself, which may still equal a
    /// known infinitive or word exactly
    Bare { term: String },
}

static HOW_DO_YOU_SAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*how\s+(?:do\s+you|to)\s+say\s+(.+?)\s*\??\s*$").expect("valid regex")
});
static WHAT_DOES_MEAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*what\s+does\s+(.+?)\s+mean\s*\??\s*$").expect("valid regex")
});
static CONJUGATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*conjugat(?:e|ion\s+of)\s+(.+?)\s*\??\s*$").expect("valid regex")
});
static TENSE_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(past|preterite|imperfect|future|conditional|subjunctive)\s+(?:tense\s+)?of\s+(.+?)\s*\??\s*$",
    )
    .expect("valid regex")
});
static IN_TENSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(.+?)\s+in\s+the\s+(past|preterite|imperfect|future|conditional|subjunctive)(?:\s+tense)?\s*\??\s*$",
    )
    .expect("valid regex")
});
static VERSUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(.+?)\s+(?:vs\.?|versus)\s+(.+?)\s*\??\s*$").expect("valid regex")
});
static WHAT_IS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*what\s+is\s+(.+?)\s*\??\s*$").expect("valid regex")
});

/// Classify a raw (non-normalized) query. Patterns are tried from most to
/// least specific; the first hit wins.
pub fn classify(query: &str) -> Intent {
    if let Some(c) = HOW_DO_YOU_SAY.captures(query) {
        return Intent::Translation { term: c[1].to_string() };
    }
    if let Some(c) = WHAT_DOES_MEAN.captures(query) {
        return Intent::Definition { term: c[1].to_string() };
    }
    if let Some(c) = CONJUGATE.captures(query) {
        return Intent::Conjugation { term: c[1].to_string() };
    }
    if let Some(c) = TENSE_OF.captures(query) {
        if let Some(tense) = TenseQuery::from_word(&c[1]) {
            return Intent::Tense { tense, term: c[2].to_string() };
        }
    }
    if let Some(c) = IN_TENSE.captures(query) {
        if let Some(tense) = TenseQuery::from_word(&c[2]) {
            return Intent::Tense { tense, term: c[1].to_string() };
        }
    }
    if let Some(c) = VERSUS.captures(query) {
        return Intent::Comparison {
            left: c[1].to_string(),
            right: c[2].to_string(),
        };
    }
    if let Some(c) = WHAT_IS.captures(query) {
        return Intent::Definition { term: c[1].to_string() };
    }
    Intent::Bare {
        term: query.trim().to_string(),
    }
}
