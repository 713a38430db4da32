//! OPD routing for GREEN-tag patients.
//!
//! Purely informational: the recommendation points a routine patient at an
//! outpatient department, it never changes the triage tag.

use triage_core::models::department::Department;
use triage_core::models::patient::{Gender, PatientSnapshot};

use crate::catalog::{Severity, SymptomCatalog};

const GYN_KEYWORDS: [&str; 4] = ["gynecological", "pregnancy", "menstrual", "vaginal"];
const ORTHO_KEYWORDS: [&str; 4] = ["joint", "bone", "fracture", "sprain"];
const PSYCH_KEYWORDS: [&str; 4] = ["mental", "psychiatric", "anxiety", "depression"];

/// Pick the outpatient department for a GREEN-tag patient. Pediatric age
/// wins outright; otherwise the checked GREEN symptoms are scanned in
/// catalog order and the first category hit decides.
pub fn recommend_department(snapshot: &PatientSnapshot, catalog: &SymptomCatalog) -> Department {
    if let Some(age) = snapshot.age
        && age > 0
        && age < 18
    {
        return Department::Pediatrics;
    }

    for entry in catalog.by_severity(Severity::Green) {
        if !snapshot.symptoms.contains(&entry.id) {
            continue;
        }
        let name = entry.name.to_lowercase();

        if snapshot.gender == Some(Gender::Female)
            && (entry.id == "gynecological" || GYN_KEYWORDS.iter().any(|w| name.contains(w)))
        {
            return Department::ObGyn;
        }
        if entry.id == "eye_problems" || name.contains("eye") || name.contains("vision") {
            return Department::Ophthalmology;
        }
        if entry.id == "joint_pain" || ORTHO_KEYWORDS.iter().any(|w| name.contains(w)) {
            return Department::Orthopedics;
        }
        if entry.id == "psychiatric_issues" || PSYCH_KEYWORDS.iter().any(|w| name.contains(w)) {
            return Department::Psychiatry;
        }
    }

    Department::InternalMedicine
}
