//! URL-Shield Inference Server
//!
//! Online half of a malicious-URL classifier: recomputes the exact feature
//! vector the offline trainer used and scores it against a pre-trained,
//! schema-versioned artifact.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        URL-SHIELD                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  POST /predict                       GET /metrics            │
//! │  ┌──────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐  │
//! │  │  Domain  │→ │  Feature  │→ │ Classifier │→ │ Metrics  │  │
//! │  │ Resolver │  │ Extractor │  │  Adapter   │  │ Recorder │  │
//! │  └──────────┘  └───────────┘  └────────────┘  └──────────┘  │
//! │        shared read-only: Arc<ClassifierArtifact>            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The artifact loads once at startup and is shared read-only; the only
//! shared mutable state is the atomic metric counters. The request path
//! does no network or disk I/O.

pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod metrics;
pub mod model;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

use metrics::Metrics;
use model::ClassifierArtifact;

/// Request body cap: bounds worst-case feature computation.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded classifier; read-only after startup. A future artifact
    /// reload must swap this pointer atomically, never lock around it.
    pub artifact: Arc<ClassifierArtifact>,
    pub metrics: Arc<Metrics>,
}

/// Create the inference service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::predict))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Create the metrics scrape router (served from a separate listener).
pub fn create_metrics_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(handlers::metrics::scrape))
        .with_state(state)
}
