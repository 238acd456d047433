use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use shared::utils::Metrics;
use std::time::Instant;

/// Records count and latency per route template, not per raw URI.
pub async fn track_metrics(
    State(metrics): State<Metrics>,
    req: Request,
    next: Next,
) -> Response {
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().to_string();

    let start = Instant::now();
    let response = next.run(req).await;

    metrics.record(&method, &path, response.status().as_u16(), start.elapsed());

    response
}
