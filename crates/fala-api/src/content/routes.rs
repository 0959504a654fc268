use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use fala_content::{GrammarTopic, Saying, Verb, VocabularyCategory};

use crate::{ApiState, error::ApiError};

/// Create the reference-content routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/vocabulary", get(get_vocabulary))
        .route("/vocabulary/{category}", get(get_vocabulary_category))
        .route("/verbs", get(get_verbs))
        .route("/verbs/{key}", get(get_verb))
        .route("/grammar", get(get_grammar))
        .route("/grammar/{id}", get(get_grammar_topic))
        .route("/sayings", get(get_sayings))
}

async fn get_vocabulary(State(state): State<ApiState>) -> Json<Vec<VocabularyCategory>> {
    Json(state.corpus.vocabulary.clone())
}

async fn get_vocabulary_category(
    State(state): State<ApiState>,
    Path(category): Path<String>,
) -> Result<Json<VocabularyCategory>, ApiError> {
    state
        .corpus
        .category(&category)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("vocabulary category {category}")))
}

async fn get_verbs(State(state): State<ApiState>) -> Json<Vec<Verb>> {
    Json(state.corpus.verbs.clone())
}

async fn get_verb(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> Result<Json<Verb>, ApiError> {
    state
        .corpus
        .verb(&key)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("verb {key}")))
}

async fn get_grammar(State(state): State<ApiState>) -> Json<Vec<GrammarTopic>> {
    Json(state.corpus.grammar.clone())
}

async fn get_grammar_topic(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<GrammarTopic>, ApiError> {
    state
        .corpus
        .grammar_topic(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("grammar topic {id}")))
}

async fn get_sayings(State(state): State<ApiState>) -> Json<Vec<Saying>> {
    Json(state.corpus.sayings.clone())
}
