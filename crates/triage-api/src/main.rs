use std::env;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use triage_api::state::AppState;
use triage_engine::SymptomCatalog;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging; level via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    // TRIAGE_CATALOG points at a JSON override for the built-in symptom
    // table. An invalid override fails startup instead of serving with a
    // half-broken rule set.
    let state = match env::var("TRIAGE_CATALOG") {
        Ok(path) => {
            tracing::info!(path, "loading symptom catalog override");
            AppState {
                catalog: Arc::new(SymptomCatalog::from_json_file(&path)?),
            }
        }
        Err(_) => AppState::standard(),
    };

    let bind = env::var("TRIAGE_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "triage api listening");

    axum::serve(listener, triage_api::app(state)).await?;
    Ok(())
}
