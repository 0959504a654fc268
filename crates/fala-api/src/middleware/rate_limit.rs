use axum::Router;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Apply the general rate limit to a router.
///
/// 20 requests per second with a burst of 40, keyed by client IP (peer
/// address or forwarding headers). Generous for a learner clicking around,
/// tight enough to keep a scraper from hammering the search endpoint.
pub fn apply_general_rate_limit<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(20)
        .burst_size(40)
        .use_headers()
        .finish()
        .expect("rate limiter configuration is valid");

    router.layer(GovernorLayer::new(governor_conf))
}
