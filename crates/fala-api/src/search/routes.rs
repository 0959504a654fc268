use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use fala_core::{SearchResponse, SmartCard};

use crate::{ApiState, error::ApiError, metrics};

/// Create the search routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/search", get(search))
}

/// Minimum trimmed query length. Enforced here so the engine can treat it
/// as a documented precondition instead of an internal check.
const MIN_QUERY_CHARS: usize = 2;

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

async fn search(
    State(state): State<ApiState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Err(ApiError::Validation(format!(
            "search query must be at least {MIN_QUERY_CHARS} characters"
        )));
    }

    let response = state.engine.search(query);

    let card = response.smart_card.as_ref().map_or("none", card_label);
    metrics::record_search(card, response.results.len());
    tracing::debug!(query, results = response.results.len(), card, "search query");

    Ok(Json(response))
}

fn card_label(card: &SmartCard) -> &'static str {
    match card {
        SmartCard::Translation { .. } => "translation",
        SmartCard::Definition { .. } => "definition",
        SmartCard::Conjugation { .. } => "conjugation",
        SmartCard::ConjugationMulti { .. } => "conjugation_multi",
        SmartCard::Tense { .. } => "tense",
        SmartCard::TenseMulti { .. } => "tense_multi",
        SmartCard::Comparison { .. } => "comparison",
        SmartCard::Grammar { .. } => "grammar",
    }
}
