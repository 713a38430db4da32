//! triage-api
//!
//! Thin HTTP surface over the triage evaluator: marshals a
//! `PatientSnapshot` in, a `TriageResult` out, and serves the symptom
//! catalog read-only. All clinical policy lives in `triage-engine`.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full router. The browser form is served from another origin,
/// so CORS stays permissive.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/symptoms", get(routes::symptoms::list_symptoms))
        .route("/symptoms/{id}", get(routes::symptoms::get_symptom_detail))
        .route("/triage", post(routes::triage::assess))
        .layer(cors)
        .with_state(state)
}
