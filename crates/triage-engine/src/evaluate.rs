//! The ordered evaluation pipeline.

use triage_core::models::patient::PatientSnapshot;
use triage_core::models::result::{TriageResult, TriageTag};

use crate::catalog::{Severity, SymptomCatalog, SymptomEntry};
use crate::error::TriageError;
use crate::routing;
use crate::vitals;

/// Classify one patient snapshot against a symptom catalog.
///
/// Total and deterministic: a fault inside the evaluator (a corrupted
/// catalog, for instance) comes back as the ERROR tag for manual review,
/// never as a substituted RED or GREEN.
pub fn evaluate(snapshot: &PatientSnapshot, catalog: &SymptomCatalog) -> TriageResult {
    match assess(snapshot, catalog) {
        Ok(result) => result,
        Err(err) => TriageResult::system_error(err),
    }
}

fn assess(
    snapshot: &PatientSnapshot,
    catalog: &SymptomCatalog,
) -> Result<TriageResult, TriageError> {
    catalog.verify()?;

    // 1. Ambulance arrival trumps everything else on the form.
    if snapshot.ambulance_arrival {
        return Ok(TriageResult::new(
            TriageTag::Red,
            "Patient arrived by ambulance",
            owned(&["Trauma", "Acute Medical Emergency", "Critical Condition"]),
        ));
    }

    // 2. RED vitals, first breach only.
    if let Some(breach) = vitals::red_alarm(snapshot) {
        return Ok(TriageResult::new(TriageTag::Red, breach.reason, breach.diagnoses));
    }

    // 3. RED symptoms, catalog order, first match.
    if let Some(entry) = first_present(snapshot, catalog, Severity::Red) {
        return Ok(TriageResult::new(
            TriageTag::Red,
            format!("Presence of RED TAG symptom: {}", entry.name),
            entry.diagnoses.clone(),
        ));
    }

    // 4. YELLOW vitals, first breach only — the pass does not go on to
    // collect further concerning vitals.
    if let Some(breach) = vitals::yellow_alarm(snapshot) {
        return Ok(TriageResult::new(TriageTag::Yellow, breach.reason, breach.diagnoses));
    }

    // 5. YELLOW symptoms accumulate: every checked symptom in the class
    // contributes its name and all of its diagnoses, duplicates included.
    let matched = all_present(snapshot, catalog, Severity::Yellow);
    if !matched.is_empty() {
        return Ok(TriageResult::new(
            TriageTag::Yellow,
            format!("YELLOW TAG conditions: {}", join_names(&matched, "; ")),
            collect_diagnoses(&matched),
        ));
    }

    // 6. GREEN symptoms accumulate the same way.
    let matched = all_present(snapshot, catalog, Severity::Green);
    if !matched.is_empty() {
        let mut result = TriageResult::new(
            TriageTag::Green,
            format!("GREEN TAG conditions: {}", join_names(&matched, ", ")),
            collect_diagnoses(&matched),
        );
        result.recommended_opd = Some(routing::recommend_department(snapshot, catalog));
        return Ok(result);
    }

    // 7. Nothing matched: routine visit.
    let mut result = TriageResult::new(
        TriageTag::Green,
        "No urgent symptoms or abnormal vital signs detected",
        owned(&["Routine Check-up", "Minor Ailment"]),
    );
    result.recommended_opd = Some(routing::recommend_department(snapshot, catalog));
    Ok(result)
}

fn first_present<'a>(
    snapshot: &PatientSnapshot,
    catalog: &'a SymptomCatalog,
    severity: Severity,
) -> Option<&'a SymptomEntry> {
    catalog
        .by_severity(severity)
        .find(|entry| snapshot.symptoms.contains(&entry.id))
}

fn all_present<'a>(
    snapshot: &PatientSnapshot,
    catalog: &'a SymptomCatalog,
    severity: Severity,
) -> Vec<&'a SymptomEntry> {
    catalog
        .by_severity(severity)
        .filter(|entry| snapshot.symptoms.contains(&entry.id))
        .collect()
}

fn join_names(entries: &[&SymptomEntry], separator: &str) -> String {
    entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

fn collect_diagnoses(entries: &[&SymptomEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.diagnoses.iter().cloned())
        .collect()
}

fn owned(diagnoses: &[&str]) -> Vec<String> {
    diagnoses.iter().map(|d| d.to_string()).collect()
}
