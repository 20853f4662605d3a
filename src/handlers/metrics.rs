//! Metrics scrape handler

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::AppState;

/// Prometheus text exposition content type.
const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

pub async fn scrape(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        state.metrics.render(),
    )
}
