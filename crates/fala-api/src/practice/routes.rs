use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use fala_content::Prompt;
use fala_core::{ResponseKind, ValidationResult, validate};

use crate::{ApiState, error::ApiError, metrics};

/// Create the practice routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/prompts", get(list_prompts))
        .route("/prompts/{id}", get(get_prompt))
        .route("/prompts/{id}/respond", post(respond))
}

/// The prompt fields a practice client needs up front. The validation
/// configuration stays server-side; only the question travels.
#[derive(Serialize, Deserialize)]
struct PromptSummary {
    id: String,
    question: String,
}

impl From<&Prompt> for PromptSummary {
    fn from(prompt: &Prompt) -> Self {
        Self {
            id: prompt.id.clone(),
            question: prompt.question.clone(),
        }
    }
}

async fn list_prompts(State(state): State<ApiState>) -> Json<Vec<PromptSummary>> {
    Json(state.prompts.all().iter().map(PromptSummary::from).collect())
}

async fn get_prompt(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<PromptSummary>, ApiError> {
    state
        .prompts
        .get(&id)
        .map(|p| Json(PromptSummary::from(p)))
        .ok_or_else(|| ApiError::NotFound(format!("prompt {id}")))
}

#[derive(Deserialize)]
struct RespondSubmission {
    input: String,
}

/// Validate a learner's free-text answer to one prompt.
///
/// The fuzzy-variant policy is the prompt's own declarative `fuzzy` block,
/// turned into the closure the validator expects; the matching engine
/// never learns prompt-specific phrasing rules.
async fn respond(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(payload): Json<RespondSubmission>,
) -> Result<Json<ValidationResult>, ApiError> {
    let prompt = state
        .prompts
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("prompt {id}")))?;

    let result = validate(
        &payload.input,
        &prompt.accepted,
        &prompt.mistakes,
        &prompt.keywords,
        |normalized| prompt.fuzzy.variants(normalized),
    );

    metrics::record_validation(kind_label(result.kind));
    tracing::debug!(prompt = %id, kind = kind_label(result.kind), "response validated");

    Ok(Json(result))
}

fn kind_label(kind: ResponseKind) -> &'static str {
    match kind {
        ResponseKind::Exact => "exact",
        ResponseKind::Keyword => "keyword",
        ResponseKind::Mistake => "mistake",
        ResponseKind::Partial => "partial",
        ResponseKind::Unknown => "unknown",
    }
}
