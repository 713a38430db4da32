//! The symptom catalog: static configuration mapping each checkbox symptom
//! to a severity class and an ordered list of candidate diagnoses.
//!
//! Severity is a field of the entry, so a symptom belonging to two classes
//! at once is structurally impossible. Iteration order is declaration
//! order, and the evaluator depends on it.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CatalogError;

/// Severity class of a catalog symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Red,
    Yellow,
    Green,
}

/// One checkbox symptom: identifier, display name, severity class, and the
/// differential diagnoses it suggests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomEntry {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    pub diagnoses: Vec<String>,
}

/// Ordered, read-only symptom configuration. Built once and shared by any
/// number of concurrent evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomCatalog {
    entries: Vec<SymptomEntry>,
}

impl SymptomCatalog {
    /// Build a catalog from explicit entries, rejecting duplicates and
    /// incomplete rows.
    pub fn from_entries(entries: Vec<SymptomEntry>) -> Result<Self, CatalogError> {
        let catalog = SymptomCatalog { entries };
        catalog.verify()?;
        Ok(catalog)
    }

    /// Load a replacement catalog from a JSON file (deployment override for
    /// the built-in table).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog: SymptomCatalog = serde_json::from_str(&raw)?;
        catalog.verify()?;
        Ok(catalog)
    }

    /// Re-check the catalog invariants. `Deserialize` can construct an
    /// unvalidated catalog, so the evaluator calls this before trusting one.
    pub fn verify(&self) -> Result<(), CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(CatalogError::EmptyId(index));
            }
            if entry.name.is_empty() {
                return Err(CatalogError::EmptyName(entry.id.clone()));
            }
            if entry.diagnoses.is_empty() {
                return Err(CatalogError::NoDiagnoses(entry.id.clone()));
            }
            if self.entries[..index].iter().any(|e| e.id == entry.id) {
                return Err(CatalogError::DuplicateSymptom(entry.id.clone()));
            }
        }
        Ok(())
    }

    /// The built-in table used by the hospital deployment.
    pub fn standard() -> &'static SymptomCatalog {
        &STANDARD
    }

    pub fn entries(&self) -> &[SymptomEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&SymptomEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries of one severity class, in declaration order.
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &SymptomEntry> {
        self.entries.iter().filter(move |e| e.severity == severity)
    }
}

fn entry(id: &str, name: &str, severity: Severity, diagnoses: &[&str]) -> SymptomEntry {
    SymptomEntry {
        id: id.to_string(),
        name: name.to_string(),
        severity,
        diagnoses: diagnoses.iter().map(|d| d.to_string()).collect(),
    }
}

static STANDARD: LazyLock<SymptomCatalog> = LazyLock::new(|| {
    use Severity::{Green, Red, Yellow};

    let entries = vec![
        entry(
            "shortness_of_breath_severe",
            "Shortness of breath / Moderate respiratory distress",
            Red,
            &["Acute Pulmonary Edema", "Severe Asthma", "Pulmonary Embolism"],
        ),
        entry(
            "vomiting_blood",
            "Vomiting blood",
            Red,
            &["Upper GI Bleeding", "Gastric Ulcer", "Esophageal Varices"],
        ),
        entry(
            "hypertension_with_symptoms",
            "Hypertension with symptoms",
            Red,
            &["Hypertensive Emergency", "End Organ Damage", "Malignant Hypertension"],
        ),
        entry(
            "chest_pain",
            "Chest Pain",
            Red,
            &["Acute Coronary Syndrome", "Myocardial Infarction", "Aortic Dissection"],
        ),
        entry(
            "severe_headache",
            "Severe/sudden headache",
            Red,
            &["Subarachnoid Hemorrhage", "Meningitis", "Cerebral Aneurysm"],
        ),
        entry(
            "major_trauma",
            "Major Trauma - blunt, no obvious injury",
            Red,
            &["Internal Bleeding", "Organ Injury", "Neurological Trauma"],
        ),
        entry(
            "abdominal_pain_severe",
            "Abdominal pain (severe - 8-10/10)",
            Red,
            &["Acute Appendicitis", "Perforated Viscus", "Acute Pancreatitis"],
        ),
        entry(
            "shortness_of_breath_mild",
            "Shortness of breath / Mild respiratory distress",
            Yellow,
            &["COPD Exacerbation", "Bronchitis", "Anxiety-induced Dyspnea"],
        ),
        entry(
            "hypertension_without_symptoms",
            "Hypertension without symptoms",
            Yellow,
            &["Essential Hypertension", "White Coat Hypertension"],
        ),
        entry(
            "vomiting_nausea",
            "Vomiting / nausea (mild dehydration)",
            Yellow,
            &["Gastroenteritis", "Food Poisoning", "Viral Infection"],
        ),
        entry(
            "headache_moderate",
            "Headache (moderate pain 4-7/10)",
            Yellow,
            &["Migraine", "Tension Headache", "Sinusitis"],
        ),
        entry(
            "bloody_diarrhea",
            "Uncontrolled Diarrhea (bloody)",
            Yellow,
            &["Inflammatory Bowel Disease", "Infectious Colitis", "Diverticulitis"],
        ),
        entry(
            "unexplained_tachycardia",
            "Unexplained tachycardia (HR >100)",
            Yellow,
            &["Anxiety", "Dehydration", "Thyrotoxicosis"],
        ),
        entry(
            "eye_problems",
            "Eye problems (redness/irritation)",
            Green,
            &["Conjunctivitis", "Dry Eyes", "Minor Eye Trauma"],
        ),
        entry(
            "psychiatric_issues",
            "Mental health concerns",
            Green,
            &["Anxiety", "Depression", "Stress"],
        ),
        entry(
            "joint_pain",
            "Joint/bone pain (chronic)",
            Green,
            &["Osteoarthritis", "Minor Sprain", "Chronic Joint Pain"],
        ),
        entry(
            "gynecological",
            "Gynecological issues",
            Green,
            &["Menstrual Issues", "Minor Vaginal Discharge", "Pregnancy Check"],
        ),
        entry(
            "pediatric_routine",
            "Routine pediatric issues",
            Green,
            &["Growth Check", "Vaccination", "Minor Pediatric Ailments"],
        ),
        entry(
            "general_symptoms",
            "General medical issues",
            Green,
            &["Minor Infections", "Chronic Disease Follow-up", "Medication Review"],
        ),
        entry(
            "constipation",
            "Constipation",
            Green,
            &["Functional Constipation", "Diet-related", "Medication Side Effect"],
        ),
        entry(
            "medication_request",
            "Medication request",
            Green,
            &["Medication Refill", "Prescription Review"],
        ),
        entry(
            "dressing_change",
            "Dressing change",
            Green,
            &["Wound Care", "Post-operative Care"],
        ),
        entry(
            "mild_diarrhea",
            "Mild diarrhea (no blood)",
            Green,
            &["Viral Gastroenteritis", "Dietary Indiscretion", "IBS"],
        ),
    ];

    SymptomCatalog::from_entries(entries).expect("built-in catalog satisfies its own invariants")
});
