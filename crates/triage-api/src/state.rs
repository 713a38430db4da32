use std::sync::Arc;

use triage_engine::SymptomCatalog;

/// Shared application state, injected into all route handlers via Axum
/// state. The catalog is read-only after startup, so concurrent requests
/// share it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SymptomCatalog>,
}

impl AppState {
    /// State backed by the built-in symptom table.
    pub fn standard() -> Self {
        AppState {
            catalog: Arc::new(SymptomCatalog::standard().clone()),
        }
    }
}
