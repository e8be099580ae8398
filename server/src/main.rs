mod classifier;
mod config;
mod readiness;
mod routes;
mod state;

use std::sync::Arc;

use classifier::{Classify, HttpClassifier};
use config::ServerConfig;

#[tokio::main]
async fn main() {
    // Missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");

    // Non-fatal: without a classifier every check answers 503.
    let classifier: Option<Arc<dyn Classify>> = match config.classifier.as_ref().map(HttpClassifier::from_config) {
        Some(Ok(client)) => {
            tracing::info!(base_url = client.base_url(), "classifier client initialized");
            Some(Arc::new(client))
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, "classifier client build failed; checks disabled");
            None
        }
        None => {
            tracing::warn!("CLASSIFIER_URL not set; checks disabled");
            None
        }
    };

    let state = state::AppState::new(classifier);

    let probe_interval = config.classifier.as_ref().map(config::ClassifierConfig::probe_interval);
    let _probe = probe_interval.and_then(|interval| readiness::spawn_readiness_probe(state.clone(), interval));

    let app = routes::app(state).expect("failed to build router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "newscheck listening");
    axum::serve(listener, app).await.expect("server failed");
}
