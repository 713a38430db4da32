use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// One patient presentation, as captured at the registration desk.
///
/// For the five measured vitals (`o2_saturation`, `temperature`,
/// `systolic_bp`, `diastolic_bp`, `heart_rate`) a value of `0` or an absent
/// field means "not measured" and the corresponding checks are skipped.
/// `gcs_score` is different: absent means a normal score of 15.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientSnapshot {
    #[serde(default)]
    pub ambulance_arrival: bool,

    /// Peripheral O₂ saturation in percent.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub o2_saturation: Option<f64>,

    /// Glasgow Coma Scale, 3–15.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub gcs_score: Option<i64>,

    /// Body temperature in °C.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,

    /// Blood pressure in mmHg.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub systolic_bp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub diastolic_bp: Option<f64>,

    /// Heart rate in bpm.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub heart_rate: Option<f64>,

    /// Checked symptom ids. Unknown ids are ignored by the evaluator.
    #[serde(default)]
    pub symptoms: Vec<String>,

    /// Age and gender feed OPD routing only, never the tag decision.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
    #[serde(alias = "Other")]
    Other,
}

/// Accept a number, a numeric string, or nothing. Anything that cannot be
/// read as a number becomes `None` — a malformed vital is treated as "not
/// measured" so one bad field never aborts the rest of the assessment.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}

/// Integer flavor of [`lenient_f64`], for GCS and age.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}
