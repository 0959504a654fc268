//! Level test generation.
//!
//! A test samples the corpus for questions at or below the tested
//! sub-level's CEFR band. Shuffling happens here with a caller-supplied
//! RNG; the core crate stays deterministic.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use fala_content::Corpus;
use fala_core::SubLevel;

/// One generated test question. The answer travels with the question: the
/// client grades locally and submits only the resulting accuracy, the same
/// contract the placement flow has always had with the progress layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestQuestion {
    /// Translate an English gloss into Portuguese
    Vocabulary { english: String, answer: String },
    /// Produce one conjugated form
    Conjugation {
        infinitive: String,
        tense: String,
        person: String,
        answer: String,
    },
}

/// Sample `count` questions for a sub-level from the corpus.
///
/// Vocabulary words and conjugation rows tagged at or below the
/// sub-level's band are pooled, shuffled, and truncated. A small corpus
/// simply yields fewer questions; never an error.
pub fn generate_test(
    corpus: &Corpus,
    level: SubLevel,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<TestQuestion> {
    let band = level.band();
    let mut pool: Vec<TestQuestion> = Vec::new();

    for category in &corpus.vocabulary {
        for word in &category.words {
            if word.cefr <= band {
                pool.push(TestQuestion::Vocabulary {
                    english: word.english.clone(),
                    answer: word.portuguese.clone(),
                });
            }
        }
    }

    for verb in &corpus.verbs {
        if verb.meta.cefr <= band {
            for row in &verb.conjugations {
                pool.push(TestQuestion::Conjugation {
                    infinitive: verb.key.clone(),
                    tense: row.tense.clone(),
                    person: row.person.clone(),
                    answer: row.conjugation.clone(),
                });
            }
        }
    }

    pool.shuffle(rng);
    pool.truncate(count);
    pool
}
