//! Vital-sign threshold table.
//!
//! Checks run in a fixed order — O₂ saturation, GCS, temperature, blood
//! pressure, heart rate — and the first breach answers for the whole pass.
//! For every vital except GCS a value of 0 means "not measured" and the
//! vital is skipped; an absent GCS is read as a normal 15.

use triage_core::models::patient::PatientSnapshot;

/// One vital-sign breach: the human-readable reason and the differential
/// diagnoses it suggests.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalAlarm {
    pub reason: String,
    pub diagnoses: Vec<String>,
}

fn alarm(reason: String, diagnoses: &[&str]) -> VitalAlarm {
    VitalAlarm {
        reason,
        diagnoses: diagnoses.iter().map(|d| d.to_string()).collect(),
    }
}

/// Zero is the "not measured" placeholder, carried over from the intake
/// form. Negative readings cannot occur on the form; they are skipped too.
fn measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// First vital in RED territory, if any.
pub fn red_alarm(snapshot: &PatientSnapshot) -> Option<VitalAlarm> {
    if let Some(o2) = measured(snapshot.o2_saturation)
        && o2 < 90.0
    {
        return Some(alarm(
            format!("Critical O₂ saturation: {o2}%"),
            &["Respiratory Failure", "Severe Pneumonia", "Pulmonary Embolism"],
        ));
    }

    if let Some(gcs) = snapshot.gcs_score
        && gcs < 10
    {
        return Some(alarm(
            format!("Critical GCS Score: {gcs}"),
            &["Altered Mental Status", "Intracranial Event", "Metabolic Encephalopathy"],
        ));
    }

    if let Some(temp) = measured(snapshot.temperature) {
        if temp > 40.0 {
            return Some(alarm(
                format!("Critical High Temperature: {temp}°C"),
                &["Severe Sepsis", "Malignant Hyperthermia", "Heat Stroke"],
            ));
        }
        if temp < 35.0 {
            return Some(alarm(
                format!("Critical Low Temperature: {temp}°C"),
                &["Severe Hypothermia", "Septic Shock", "Environmental Exposure"],
            ));
        }
    }

    let sbp = measured(snapshot.systolic_bp);
    let dbp = measured(snapshot.diastolic_bp);
    if sbp.is_some_and(|s| s > 220.0) || dbp.is_some_and(|d| d > 120.0) {
        return Some(alarm(
            format!("Critical High Blood Pressure: {}", bp_display(snapshot)),
            &["Hypertensive Emergency", "Malignant Hypertension", "End Organ Damage"],
        ));
    }
    if sbp.is_some_and(|s| s < 80.0) {
        return Some(alarm(
            format!("Critical Low Blood Pressure: {}", bp_display(snapshot)),
            &["Hypotensive Shock", "Sepsis", "Severe Dehydration"],
        ));
    }

    if let Some(hr) = measured(snapshot.heart_rate) {
        if hr < 40.0 {
            return Some(alarm(
                format!("Critical Low Heart Rate: {hr} bpm"),
                &["Severe Bradycardia", "Heart Block", "Sick Sinus Syndrome"],
            ));
        }
        if hr > 150.0 {
            return Some(alarm(
                format!("Critical High Heart Rate: {hr} bpm"),
                &["Severe Tachycardia", "Atrial Fibrillation", "Ventricular Tachycardia"],
            ));
        }
    }

    None
}

/// First vital in YELLOW territory, if any. Runs only after the RED pass
/// came back clean, so the checks test the concerning band directly.
pub fn yellow_alarm(snapshot: &PatientSnapshot) -> Option<VitalAlarm> {
    if let Some(o2) = measured(snapshot.o2_saturation)
        && (90.0..94.0).contains(&o2)
    {
        return Some(alarm(
            format!("Concerning O₂ saturation: {o2}%"),
            &["COPD Exacerbation", "Asthma", "Pneumonia"],
        ));
    }

    if let Some(gcs) = snapshot.gcs_score
        && (10..=13).contains(&gcs)
    {
        return Some(alarm(
            format!("Concerning GCS Score: {gcs}"),
            &["Concussion", "Medication Effect", "Metabolic Disorder"],
        ));
    }

    if let Some(temp) = measured(snapshot.temperature) {
        if (35.0..36.0).contains(&temp) {
            return Some(alarm(
                format!("Concerning Low Temperature: {temp}°C"),
                &["Mild Hypothermia", "Poor Circulation", "Environmental Exposure"],
            ));
        }
        if (38.0..=40.0).contains(&temp) {
            return Some(alarm(
                format!("Concerning High Temperature: {temp}°C"),
                &["Infection", "Inflammatory Condition", "Early Sepsis"],
            ));
        }
    }

    let sbp = measured(snapshot.systolic_bp);
    let dbp = measured(snapshot.diastolic_bp);
    if sbp.is_some_and(|s| (80.0..90.0).contains(&s)) {
        return Some(alarm(
            format!("Concerning Low Blood Pressure: {}", bp_display(snapshot)),
            &["Early Shock", "Dehydration", "Medication Effect"],
        ));
    }
    if sbp.is_some_and(|s| s > 160.0 && s <= 220.0) || dbp.is_some_and(|d| d > 100.0 && d <= 120.0)
    {
        return Some(alarm(
            format!("Concerning High Blood Pressure: {}", bp_display(snapshot)),
            &["Hypertension", "Anxiety", "Pain"],
        ));
    }

    if let Some(hr) = measured(snapshot.heart_rate) {
        if (40.0..50.0).contains(&hr) {
            return Some(alarm(
                format!("Concerning Low Heart Rate: {hr} bpm"),
                &["Bradycardia", "Beta Blocker Effect", "Athletic Heart"],
            ));
        }
        if hr > 100.0 && hr <= 150.0 {
            return Some(alarm(
                format!("Concerning High Heart Rate: {hr} bpm"),
                &["Tachycardia", "Anxiety", "Fever"],
            ));
        }
    }

    None
}

/// Blood-pressure reasons always report both readings, with 0 standing in
/// for an unmeasured side.
fn bp_display(snapshot: &PatientSnapshot) -> String {
    format!(
        "{}/{}",
        snapshot.systolic_bp.unwrap_or(0.0),
        snapshot.diastolic_bp.unwrap_or(0.0)
    )
}
