use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{content, level, practice, search, state::ApiState};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(search::routes())
        .merge(practice::routes())
        .merge(content::routes())
        .merge(level::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
