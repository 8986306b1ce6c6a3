//! Logging utilities
//!
//! Standardized log lines for assessments and generated credentials.

use crate::models::health::HealthAssessment;
use crate::utils::credentials::AccessCredential;
use std::time::Duration;

/// Log a completed assessment with consistent format
///
/// # Arguments
/// * `label` - Name of the case being assessed
/// * `assessment` - The assessment result
/// * `elapsed` - Optional elapsed time
pub fn log_assessment(label: &str, assessment: &HealthAssessment, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!(
            "{}: score {} ({}), urgency {}, see {} [{:?}]",
            label,
            assessment.health_risk_score,
            assessment.risk_label(),
            assessment.urgency_level,
            assessment.recommended_doctor_type,
            duration
        );
    } else {
        log::info!(
            "{}: score {} ({}), urgency {}, see {}",
            label,
            assessment.health_risk_score,
            assessment.risk_label(),
            assessment.urgency_level,
            assessment.recommended_doctor_type
        );
    }

    for (idx, reason) in assessment.reasoning.iter().enumerate() {
        log::debug!("{label}: reason {}: {reason}", idx + 1);
    }

    if assessment.is_emergency() {
        log::warn!("{label}: emergency urgency, {}", assessment.summary);
    }
}

/// Log a generated credential without exposing the full key
pub fn log_credential_issued(credential: &AccessCredential) {
    let prefix = credential.access_key.split('-').next().unwrap_or_default();
    let hash_prefix: String = credential.key_hash.chars().take(8).collect();
    log::info!("Issued display credential {prefix}-****-****-**** (mock hash {hash_prefix}...)");
}
