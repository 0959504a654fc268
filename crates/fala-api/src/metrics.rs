//! Prometheus metrics for request throughput and the core components.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics exporter.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let builder = PrometheusBuilder::new();

    // Request-duration histogram buckets, in seconds. Everything here is an
    // in-memory scan, so the interesting resolution is at the low end.
    let builder = builder.set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0],
    )?;

    let handle = builder.install_recorder()?;

    Ok(handle)
}

/// Middleware recording a counter and duration histogram per request.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    // Normalize the path to avoid per-entity label cardinality.
    let normalized_path = normalize_path(&path);

    let response: Response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => normalized_path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => normalized_path,
        "status" => status
    )
    .record(duration);

    response
}

/// Replace the trailing identifier segments of content routes with
/// placeholders so each verb/prompt/topic does not become its own label.
fn normalize_path(path: &str) -> String {
    let id_segment = regex::Regex::new(
        r"^/(verbs|prompts|vocabulary|grammar|levels)/([^/]+)",
    )
    .expect("valid regex");

    id_segment.replace(path, "/$1/:id").to_string()
}

/// Handler for the `/metrics` endpoint.
pub async fn metrics_handler(
    axum::extract::State(handle): axum::extract::State<PrometheusHandle>,
) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record one search query: which intent produced a smart card (or "none")
/// and how many general results came back.
pub fn record_search(card_type: &str, result_count: usize) {
    counter!(
        "search_queries_total",
        "card" => card_type.to_string()
    )
    .increment(1);

    histogram!("search_result_count").record(result_count as f64);
}

/// Record one response validation by outcome kind.
pub fn record_validation(kind: &str) {
    counter!(
        "validations_total",
        "kind" => kind.to_string()
    )
    .increment(1);
}

/// Record one level-test submission.
pub fn record_level_test(passed: bool) {
    let outcome = if passed { "passed" } else { "failed" };

    counter!(
        "level_tests_total",
        "outcome" => outcome.to_string()
    )
    .increment(1);
}
