use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("symptom catalog is empty")]
    Empty,

    #[error("duplicate symptom id: {0}")]
    DuplicateSymptom(String),

    #[error("symptom entry #{0} has an empty id")]
    EmptyId(usize),

    #[error("symptom '{0}' has an empty display name")]
    EmptyName(String),

    #[error("symptom '{0}' has no candidate diagnoses")]
    NoDiagnoses(String),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("symptom catalog invalid: {0}")]
    Catalog(#[from] CatalogError),
}
