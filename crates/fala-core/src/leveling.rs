//! Level progression for the learning sections.
//!
//! Every section (conjugations, vocabulary, grammar) moves through the same
//! 15 sub-levels, A1.1 through B1.5, strictly linearly. A passed level test
//! advances the section by exactly one step, never further, and
//! `highest_passed` only ever grows.

use serde::{Deserialize, Serialize};

use fala_content::CefrLevel;

/// One of the 15 linear progression steps.
///
/// Declaration order is progression order, so the derived `Ord` compares
/// sub-levels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubLevel {
    #[serde(rename = "A1.1")]
    A1_1,
    #[serde(rename = "A1.2")]
    A1_2,
    #[serde(rename = "A1.3")]
    A1_3,
    #[serde(rename = "A1.4")]
    A1_4,
    #[serde(rename = "A1.5")]
    A1_5,
    #[serde(rename = "A2.1")]
    A2_1,
    #[serde(rename = "A2.2")]
    A2_2,
    #[serde(rename = "A2.3")]
    A2_3,
    #[serde(rename = "A2.4")]
    A2_4,
    #[serde(rename = "A2.5")]
    A2_5,
    #[serde(rename = "B1.1")]
    B1_1,
    #[serde(rename = "B1.2")]
    B1_2,
    #[serde(rename = "B1.3")]
    B1_3,
    #[serde(rename = "B1.4")]
    B1_4,
    #[serde(rename = "B1.5")]
    B1_5,
}

impl SubLevel {
    /// All sub-levels in progression order.
    pub const ALL: [Self; 15] = [
        Self::A1_1,
        Self::A1_2,
        Self::A1_3,
        Self::A1_4,
        Self::A1_5,
        Self::A2_1,
        Self::A2_2,
        Self::A2_3,
        Self::A2_4,
        Self::A2_5,
        Self::B1_1,
        Self::B1_2,
        Self::B1_3,
        Self::B1_4,
        Self::B1_5,
    ];

    /// The sub-level code as shown to learners (e.g. "A1.1").
    pub const fn code(self) -> &'static str {
        match self {
            Self::A1_1 => "A1.1",
            Self::A1_2 => "A1.2",
            Self::A1_3 => "A1.3",
            Self::A1_4 => "A1.4",
            Self::A1_5 => "A1.5",
            Self::A2_1 => "A2.1",
            Self::A2_2 => "A2.2",
            Self::A2_3 => "A2.3",
            Self::A2_4 => "A2.4",
            Self::A2_5 => "A2.5",
            Self::B1_1 => "B1.1",
            Self::B1_2 => "B1.2",
            Self::B1_3 => "B1.3",
            Self::B1_4 => "B1.4",
            Self::B1_5 => "B1.5",
        }
    }

    /// Parse a sub-level code ("A1.1"). Case-sensitive, as codes are only
    /// ever produced by this module or the level plan data.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// The next sub-level, or `None` at the terminal B1.5.
    pub fn next(self) -> Option<Self> {
        let idx = Self::ALL.iter().position(|l| *l == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    /// The CEFR band this sub-level belongs to.
    pub const fn band(self) -> CefrLevel {
        match self {
            Self::A1_1 | Self::A1_2 | Self::A1_3 | Self::A1_4 | Self::A1_5 => CefrLevel::A1,
            Self::A2_1 | Self::A2_2 | Self::A2_3 | Self::A2_4 | Self::A2_5 => CefrLevel::A2,
            Self::B1_1 | Self::B1_2 | Self::B1_3 | Self::B1_4 | Self::B1_5 => CefrLevel::B1,
        }
    }

    /// Built-in pass target for this sub-level's band, used when the level
    /// plan data has no override.
    pub const fn default_target_accuracy(self) -> f64 {
        match self.band() {
            CefrLevel::A1 => 0.8,
            CefrLevel::A2 => 0.85,
            CefrLevel::B1 => 0.9,
        }
    }
}

impl std::fmt::Display for SubLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A section's progression state. Held by the client (progress persistence
/// lives with the excluded sync collaborator); the server only computes
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProgress {
    /// The sub-level the learner is currently working at
    pub current_level: SubLevel,
    /// The highest sub-level ever passed, monotonically non-decreasing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_passed: Option<SubLevel>,
}

impl Default for SectionProgress {
    fn default() -> Self {
        Self {
            current_level: SubLevel::A1_1,
            highest_passed: None,
        }
    }
}

/// Result of applying one level-test outcome to a section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Whether the test met the target accuracy
    pub passed: bool,
    /// The (possibly advanced) progression state
    pub progress: SectionProgress,
}

/// Apply a level-test result to a section's progression.
///
/// A test only counts toward advancement when it was taken at the section's
/// current level: passing a level below the current one changes nothing
/// (it was already passed), and a test claimed for a level above it cannot
/// skip the ladder. On a pass at the current level, `highest_passed` rises
/// to that level and `current_level` becomes its successor, or stays put
/// at the terminal B1.5, which has no successor.
pub fn apply_test_result(
    progress: SectionProgress,
    tested_level: SubLevel,
    accuracy: f64,
    target_accuracy: f64,
) -> TestOutcome {
    let passed = accuracy >= target_accuracy;
    if !passed || tested_level != progress.current_level {
        return TestOutcome { passed, progress };
    }
    if progress.highest_passed.is_some_and(|h| h >= tested_level) {
        // Retake of an already-passed level: monotone, nothing to do.
        return TestOutcome { passed, progress };
    }
    let next = SectionProgress {
        current_level: tested_level.next().unwrap_or(tested_level),
        highest_passed: Some(tested_level),
    };
    TestOutcome { passed, progress: next }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_levels_in_order() {
        assert_eq!(SubLevel::ALL.len(), 15);
        assert_eq!(SubLevel::ALL[0], SubLevel::A1_1);
        assert_eq!(SubLevel::ALL[14], SubLevel::B1_5);
        for pair in SubLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn next_walks_the_ladder() {
        assert_eq!(SubLevel::A1_1.next(), Some(SubLevel::A1_2));
        assert_eq!(SubLevel::A1_5.next(), Some(SubLevel::A2_1));
        assert_eq!(SubLevel::A2_5.next(), Some(SubLevel::B1_1));
        assert_eq!(SubLevel::B1_5.next(), None);
    }

    #[test]
    fn parse_round_trips_codes() {
        for level in SubLevel::ALL {
            assert_eq!(SubLevel::parse(level.code()), Some(level));
        }
        assert_eq!(SubLevel::parse("C1.1"), None);
        assert_eq!(SubLevel::parse("a1.1"), None);
    }

    #[test]
    fn bands_split_five_five_five() {
        use fala_content::CefrLevel;
        let a1 = SubLevel::ALL.iter().filter(|l| l.band() == CefrLevel::A1).count();
        let a2 = SubLevel::ALL.iter().filter(|l| l.band() == CefrLevel::A2).count();
        let b1 = SubLevel::ALL.iter().filter(|l| l.band() == CefrLevel::B1).count();
        assert_eq!((a1, a2, b1), (5, 5, 5));
    }

    #[test]
    fn initial_state_is_a1_1_nothing_passed() {
        let progress = SectionProgress::default();
        assert_eq!(progress.current_level, SubLevel::A1_1);
        assert_eq!(progress.highest_passed, None);
    }

    #[test]
    fn passing_advances_exactly_one_step() {
        let outcome = apply_test_result(SectionProgress::default(), SubLevel::A1_1, 0.9, 0.8);
        assert!(outcome.passed);
        assert_eq!(outcome.progress.current_level, SubLevel::A1_2);
        assert_eq!(outcome.progress.highest_passed, Some(SubLevel::A1_1));
    }

    #[test]
    fn perfect_score_still_advances_only_one_step() {
        let outcome = apply_test_result(SectionProgress::default(), SubLevel::A1_1, 1.0, 0.8);
        assert_eq!(outcome.progress.current_level, SubLevel::A1_2);
    }

    #[test]
    fn exact_target_accuracy_passes() {
        let outcome = apply_test_result(SectionProgress::default(), SubLevel::A1_1, 0.8, 0.8);
        assert!(outcome.passed);
    }

    #[test]
    fn failing_changes_nothing() {
        let outcome = apply_test_result(SectionProgress::default(), SubLevel::A1_1, 0.5, 0.8);
        assert!(!outcome.passed);
        assert_eq!(outcome.progress, SectionProgress::default());
    }

    #[test]
    fn test_above_current_level_cannot_skip() {
        let outcome = apply_test_result(SectionProgress::default(), SubLevel::A2_3, 1.0, 0.85);
        assert!(outcome.passed);
        assert_eq!(outcome.progress, SectionProgress::default());
    }

    #[test]
    fn retake_of_passed_level_keeps_progress_monotone() {
        let progress = SectionProgress {
            current_level: SubLevel::A1_3,
            highest_passed: Some(SubLevel::A1_2),
        };
        let outcome = apply_test_result(progress, SubLevel::A1_2, 1.0, 0.8);
        assert!(outcome.passed);
        assert_eq!(outcome.progress, progress);
    }

    #[test]
    fn terminal_level_has_no_further_transition() {
        let progress = SectionProgress {
            current_level: SubLevel::B1_5,
            highest_passed: Some(SubLevel::B1_4),
        };
        let outcome = apply_test_result(progress, SubLevel::B1_5, 0.95, 0.9);
        assert!(outcome.passed);
        assert_eq!(outcome.progress.highest_passed, Some(SubLevel::B1_5));
        // No successor: current level stays put.
        assert_eq!(outcome.progress.current_level, SubLevel::B1_5);
    }

    #[test]
    fn walking_the_whole_ladder_ends_at_terminal() {
        let mut progress = SectionProgress::default();
        for _ in 0..20 {
            let level = progress.current_level;
            progress = apply_test_result(progress, level, 1.0, 0.9).progress;
        }
        assert_eq!(progress.current_level, SubLevel::B1_5);
        assert_eq!(progress.highest_passed, Some(SubLevel::B1_5));
    }

    #[test]
    fn default_targets_rise_with_band() {
        assert_eq!(SubLevel::A1_1.default_target_accuracy(), 0.8);
        assert_eq!(SubLevel::A2_1.default_target_accuracy(), 0.85);
        assert_eq!(SubLevel::B1_5.default_target_accuracy(), 0.9);
    }
}
