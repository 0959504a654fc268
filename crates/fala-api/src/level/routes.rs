use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fala_core::{SectionProgress, SubLevel, apply_test_result};

use crate::{ApiState, error::ApiError, metrics};

use super::model::{TestQuestion, generate_test};

/// Create the level routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/levels", get(list_levels))
        .route("/levels/{level}/test", get(get_level_test))
        .route("/levels/progress", post(submit_progress))
}

#[derive(Serialize, Deserialize)]
struct LevelInfo {
    level: SubLevel,
    target_accuracy: f64,
}

/// Target accuracy for a sub-level: the level plan's override when
/// present, the band default otherwise.
fn target_accuracy(state: &ApiState, level: SubLevel) -> f64 {
    state
        .corpus
        .level_target(level.code())
        .unwrap_or_else(|| level.default_target_accuracy())
}

async fn list_levels(State(state): State<ApiState>) -> Json<Vec<LevelInfo>> {
    Json(
        SubLevel::ALL
            .into_iter()
            .map(|level| LevelInfo {
                level,
                target_accuracy: target_accuracy(&state, level),
            })
            .collect(),
    )
}

#[derive(Deserialize)]
struct TestParams {
    count: Option<usize>,
}

#[derive(Serialize, Deserialize)]
struct LevelTest {
    level: SubLevel,
    target_accuracy: f64,
    questions: Vec<TestQuestion>,
}

async fn get_level_test(
    State(state): State<ApiState>,
    Path(level): Path<String>,
    Query(params): Query<TestParams>,
) -> Result<Json<LevelTest>, ApiError> {
    let level = SubLevel::parse(&level)
        .ok_or_else(|| ApiError::NotFound(format!("sub-level {level}")))?;

    let count = params.count.unwrap_or(state.level_test_questions);
    let questions = generate_test(&state.corpus, level, count, &mut rand::thread_rng());

    Ok(Json(LevelTest {
        level,
        target_accuracy: target_accuracy(&state, level),
        questions,
    }))
}

#[derive(Deserialize)]
struct ProgressSubmission {
    /// The client-held progression state; a fresh section when omitted
    #[serde(default)]
    progress: Option<SectionProgress>,
    /// The sub-level the test was taken at
    level: SubLevel,
    /// Graded accuracy in [0, 1]
    accuracy: f64,
}

#[derive(Serialize, Deserialize)]
struct ProgressResponse {
    passed: bool,
    accuracy: f64,
    target_accuracy: f64,
    progress: SectionProgress,
    evaluated_at: DateTime<Utc>,
}

/// Apply a graded level test to a section's progression.
///
/// Progress persistence belongs to the client and its sync layer; the
/// server only computes the transition and hands the new state back.
async fn submit_progress(
    State(state): State<ApiState>,
    Json(payload): Json<ProgressSubmission>,
) -> Result<Json<ProgressResponse>, ApiError> {
    if !(0.0..=1.0).contains(&payload.accuracy) {
        return Err(ApiError::Validation(
            "accuracy must be between 0 and 1".to_string(),
        ));
    }

    let progress = payload.progress.unwrap_or_default();
    let target = target_accuracy(&state, payload.level);
    let outcome = apply_test_result(progress, payload.level, payload.accuracy, target);

    metrics::record_level_test(outcome.passed);
    tracing::debug!(
        level = %payload.level,
        accuracy = payload.accuracy,
        passed = outcome.passed,
        "level test submitted"
    );

    Ok(Json(ProgressResponse {
        passed: outcome.passed,
        accuracy: payload.accuracy,
        target_accuracy: target,
        progress: outcome.progress,
        evaluated_at: Utc::now(),
    }))
}
