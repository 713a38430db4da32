use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use triage_engine::{Severity, SymptomEntry};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SymptomSummary {
    id: String,
    name: String,
    severity: Severity,
}

pub async fn list_symptoms(State(state): State<AppState>) -> Json<Vec<SymptomSummary>> {
    let symptoms: Vec<SymptomSummary> = state
        .catalog
        .entries()
        .iter()
        .map(|e| SymptomSummary {
            id: e.id.clone(),
            name: e.name.clone(),
            severity: e.severity,
        })
        .collect();
    Json(symptoms)
}

pub async fn get_symptom_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SymptomEntry>, ApiError> {
    let entry = state
        .catalog
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("symptom not found: {id}")))?;

    Ok(Json(entry.clone()))
}
