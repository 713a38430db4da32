use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::department::Department;

/// Urgency tier assigned to one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum TriageTag {
    Red,
    Yellow,
    Green,
    Error,
}

impl TriageTag {
    /// Target time to physician assessment for this tier.
    pub fn target_time(self) -> &'static str {
        match self {
            TriageTag::Red => "15 minutes",
            TriageTag::Yellow => "30 minutes",
            TriageTag::Green => "60 minutes",
            TriageTag::Error => "N/A",
        }
    }
}

/// Outcome of one triage evaluation.
///
/// `diagnoses` keeps encounter order and keeps duplicates: when two matched
/// symptoms share a candidate diagnosis it is listed twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageResult {
    pub tag: TriageTag,
    pub target_time: String,
    pub reason: String,
    pub diagnoses: Vec<String>,
    /// Present only on GREEN results.
    pub recommended_opd: Option<Department>,
}

impl TriageResult {
    pub fn new(tag: TriageTag, reason: impl Into<String>, diagnoses: Vec<String>) -> Self {
        TriageResult {
            tag,
            target_time: tag.target_time().to_string(),
            reason: reason.into(),
            diagnoses,
            recommended_opd: None,
        }
    }

    /// The ERROR surface for faults in the evaluator itself. Callers must
    /// route this to a human for manual reassessment; it is never folded
    /// into a RED or GREEN default.
    pub fn system_error(message: impl std::fmt::Display) -> Self {
        TriageResult {
            tag: TriageTag::Error,
            target_time: TriageTag::Error.target_time().to_string(),
            reason: format!("Assessment failed: {message}"),
            diagnoses: vec!["System Error - Please reassess manually".to_string()],
            recommended_opd: None,
        }
    }
}
