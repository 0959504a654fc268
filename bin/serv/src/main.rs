use std::net::SocketAddr;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use fala_api::{
    config::ApiConfig,
    metrics,
    middleware::{cors, rate_limit, request_id},
    router, state::ApiState, tracing as tracing_setup,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env();

    tracing_setup::init_tracing(config.env);

    // Load the bundled content and build the search engine
    let state = ApiState::new(&config)?;

    // Prometheus exporter and its own small router
    let metrics_handle = metrics::init_metrics()?;
    let metrics_router = Router::new()
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(metrics_handle);

    let api = router::router()
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware));

    let app = rate_limit::apply_general_rate_limit(api)
        .with_state(state)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
        .layer(cors::create_cors_layer(&config.allowed_origins));

    // Start the server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
