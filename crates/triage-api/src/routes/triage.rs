use axum::Json;
use axum::extract::State;

use triage_core::models::patient::PatientSnapshot;
use triage_core::models::result::TriageResult;
use triage_engine::evaluate;

use crate::state::AppState;

/// Run one assessment. Always answers 200: an ERROR-tagged result is a
/// valid outcome the caller must surface for manual review, not an HTTP
/// failure. The log line records the tag only, never the patient payload.
pub async fn assess(
    State(state): State<AppState>,
    Json(snapshot): Json<PatientSnapshot>,
) -> Json<TriageResult> {
    let result = evaluate(&snapshot, &state.catalog);
    tracing::info!(tag = ?result.tag, "triage assessment completed");
    Json(result)
}
