use axum::http::{Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Create the CORS layer.
///
/// With an explicit origin list, only those origins are allowed with the
/// standard read/submit methods. An empty list is the development
/// configuration: very permissive, any origin.
pub fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|s| s.parse::<axum::http::HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
