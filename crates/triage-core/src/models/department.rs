use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outpatient department a GREEN-tag patient is pointed at. Informational
/// only — routing never changes the triage tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Department {
    Pediatrics,
    #[serde(rename = "OB/GYN")]
    ObGyn,
    Ophthalmology,
    Orthopedics,
    Psychiatry,
    #[serde(rename = "Internal Medicine")]
    InternalMedicine,
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Department::Pediatrics => "Pediatrics",
            Department::ObGyn => "OB/GYN",
            Department::Ophthalmology => "Ophthalmology",
            Department::Orthopedics => "Orthopedics",
            Department::Psychiatry => "Psychiatry",
            Department::InternalMedicine => "Internal Medicine",
        };
        f.write_str(name)
    }
}
