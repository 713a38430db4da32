//! Loading a replacement symptom catalog from JSON.

use std::io::Write;

use triage_core::models::patient::PatientSnapshot;
use triage_core::models::result::TriageTag;
use triage_engine::{CatalogError, Severity, SymptomCatalog, evaluate};

fn write_temp(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn override_catalog_loads_and_evaluates() {
    let file = write_temp(
        r#"{"entries": [
            {"id": "snake_bite", "name": "Snake bite", "severity": "red",
             "diagnoses": ["Envenomation", "Anaphylaxis"]},
            {"id": "sunburn", "name": "Sunburn", "severity": "green",
             "diagnoses": ["First-degree Burn"]}
        ]}"#,
    );
    let catalog = SymptomCatalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.entries().len(), 2);
    assert_eq!(catalog.get("snake_bite").unwrap().severity, Severity::Red);

    let snapshot = PatientSnapshot {
        symptoms: vec!["snake_bite".to_string()],
        ..PatientSnapshot::default()
    };
    let result = evaluate(&snapshot, &catalog);
    assert_eq!(result.tag, TriageTag::Red);
    assert_eq!(result.reason, "Presence of RED TAG symptom: Snake bite");
    assert_eq!(result.diagnoses, vec!["Envenomation", "Anaphylaxis"]);
}

#[test]
fn invalid_override_is_rejected_at_load() {
    let duplicate = write_temp(
        r#"{"entries": [
            {"id": "x", "name": "X", "severity": "green", "diagnoses": ["A"]},
            {"id": "x", "name": "X2", "severity": "yellow", "diagnoses": ["B"]}
        ]}"#,
    );
    let err = SymptomCatalog::from_json_file(duplicate.path()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateSymptom(id) if id == "x"));

    let garbage = write_temp("not json at all");
    let err = SymptomCatalog::from_json_file(garbage.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SymptomCatalog::from_json_file("/no/such/catalog.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
