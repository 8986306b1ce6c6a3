//! Symptom and diagnosis weight tables
//!
//! Static lookups from identifier to risk weight. Unknown keys fall back to
//! a default weight so that scoring stays total over arbitrary strings.

use lazy_static::lazy_static;
use log::trace;
use rustc_hash::FxHashMap;

/// Weight used for symptoms missing from the table
pub const DEFAULT_SYMPTOM_WEIGHT: u32 = 5;

/// Risk factor used for diagnoses missing from the table
pub const DEFAULT_DIAGNOSIS_RISK: u32 = 5;

/// Symptom identifier that always escalates to emergency
pub const CHEST_TIGHTNESS: &str = "chest-tightness";

/// Diagnosis that routes monitored cases to a cardiologist
pub const HEART_DISEASE: &str = "Heart Disease";

/// Diagnosis that routes monitored cases to a pulmonologist
pub const ASTHMA: &str = "Asthma";

lazy_static! {
    static ref SYMPTOM_WEIGHTS: FxHashMap<&'static str, u32> = [
        (CHEST_TIGHTNESS, 25),
        ("shortness-of-breath", 20),
        ("palpitations", 15),
        ("dizziness", 12),
        ("fever", 10),
        ("cough", 8),
        ("fatigue", 7),
        ("headache", 6),
        ("nausea", 6),
        ("insomnia", 6),
        ("joint-pain", 5),
        ("sore-throat", 4),
        ("runny-nose", 2),
    ]
    .into_iter()
    .collect();

    static ref DIAGNOSIS_RISKS: FxHashMap<&'static str, u32> = [
        (HEART_DISEASE, 20),
        ("Cancer", 20),
        ("COPD", 18),
        ("Diabetes", 15),
        ("Kidney Disease", 15),
        ("Stroke", 15),
        ("Hypertension", 12),
        (ASTHMA, 10),
        ("Obesity", 10),
        ("Depression", 6),
        ("Anxiety", 5),
    ]
    .into_iter()
    .collect();
}

/// Weight for a symptom identifier, exact match
#[must_use]
pub fn symptom_weight(symptom: &str) -> u32 {
    SYMPTOM_WEIGHTS.get(symptom).copied().unwrap_or_else(|| {
        trace!("Unknown symptom '{symptom}', using default weight {DEFAULT_SYMPTOM_WEIGHT}");
        DEFAULT_SYMPTOM_WEIGHT
    })
}

/// Risk factor for a diagnosis name, exact match
#[must_use]
pub fn diagnosis_risk(diagnosis: &str) -> u32 {
    DIAGNOSIS_RISKS.get(diagnosis).copied().unwrap_or_else(|| {
        trace!("Unknown diagnosis '{diagnosis}', using default risk {DEFAULT_DIAGNOSIS_RISK}");
        DEFAULT_DIAGNOSIS_RISK
    })
}

/// Whether the symptom has its own table entry
#[must_use]
pub fn is_known_symptom(symptom: &str) -> bool {
    SYMPTOM_WEIGHTS.contains_key(symptom)
}

/// Whether the diagnosis has its own table entry
#[must_use]
pub fn is_known_diagnosis(diagnosis: &str) -> bool {
    DIAGNOSIS_RISKS.contains_key(diagnosis)
}
