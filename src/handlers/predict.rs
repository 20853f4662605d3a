//! Prediction handler
//!
//! Stateless per-request pipeline: resolve domain → extract features →
//! classify → record metrics → respond. The only cross-request coupling is
//! the shared append-only counters.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::features::{extract, resolve};
use crate::model;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub malicious: bool,
    pub score: f64,
}

/// Classify one URL.
///
/// The body is taken as loose JSON and the `url` field checked by hand so a
/// missing or wrong-typed field maps to a clean 400 before any other work.
/// The URL VALUE is never validated: malformed URLs are legitimate input
/// and degrade to default features inside extraction.
pub async fn predict(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<PredictResponse>> {
    let url = body
        .get("url")
        .and_then(|value| value.as_str())
        .ok_or_else(|| AppError::MissingField("missing string field `url`".to_string()))?;

    let domain = resolve(url);
    let vector = extract(url, &domain);

    let verdict = model::predict(&state.artifact, &vector)
        .map_err(|e| AppError::Classification(e.to_string()))?;

    state.metrics.record(&verdict);
    if verdict.malicious {
        tracing::info!(url = %url, score = verdict.score, "Malicious URL detected");
    }

    Ok(Json(PredictResponse {
        malicious: verdict.malicious,
        score: verdict.score,
    }))
}
