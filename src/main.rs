//! URL-Shield server binary
//!
//! Startup is fatal-fast: missing configuration or a rejected classifier
//! artifact exits nonzero before either listener binds.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use urlshield::config::Config;
use urlshield::features::layout;
use urlshield::metrics::Metrics;
use urlshield::model::ClassifierArtifact;
use urlshield::{create_metrics_router, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urlshield=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid startup configuration")?;

    tracing::info!("URL-Shield inference server starting...");
    tracing::info!(
        "Feature schema v{} ({} features, layout hash {:08x})",
        layout::FEATURE_VERSION,
        layout::FEATURE_COUNT,
        layout::layout_hash()
    );

    // Load the classifier artifact; the service must not come up without it
    let artifact = ClassifierArtifact::load(&config.model_path)
        .with_context(|| format!("rejected classifier artifact {}", config.model_path.display()))?;
    tracing::info!(
        "Classifier artifact loaded from {} (schema v{})",
        config.model_path.display(),
        artifact.schema_version
    );

    let state = AppState {
        artifact: Arc::new(artifact),
        metrics: Arc::new(Metrics::new()),
    };

    let app = create_router(state.clone());
    let metrics_app = create_metrics_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let metrics_addr = SocketAddr::from(([0, 0, 0, 0], config.metrics_port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    let metrics_listener = tokio::net::TcpListener::bind(metrics_addr)
        .await
        .with_context(|| format!("cannot bind {metrics_addr}"))?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Metrics exposed on http://{}/metrics", metrics_addr);

    tokio::try_join!(
        async { axum::serve(listener, app).await },
        async { axum::serve(metrics_listener, metrics_app).await },
    )?;

    Ok(())
}
