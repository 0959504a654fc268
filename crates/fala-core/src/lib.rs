//! Core algorithms for the FALA European Portuguese practice API.
//!
//! Everything in this crate is pure and synchronous: text normalization,
//! free-text response validation, content search with smart-card synthesis,
//! and the level progression state machine. No I/O and no shared mutable
//! state; callers hand in immutable data and get values back, so the
//! components can be shared across concurrent requests and tested
//! exhaustively.

pub mod leveling;
pub mod normalize;
pub mod search;
pub mod validate;

pub use leveling::{SectionProgress, SubLevel, TestOutcome, apply_test_result};
pub use normalize::normalize;
pub use search::{SearchEngine, SearchResponse, SearchResult, SmartCard};
pub use validate::{ResponseKind, ValidationResult, validate};
