//! Health assessment model
//!
//! The output record of the risk scorer.

use crate::algorithm::health::risk::summary::RiskLabel;
use crate::algorithm::health::risk::urgency::{DoctorType, UrgencyLevel};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Result of a health risk analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAssessment {
    /// Risk score, always within 0-100
    pub health_risk_score: u8,
    /// Triage classification derived from the score and symptoms
    pub urgency_level: UrgencyLevel,
    /// Specialist to consult
    pub recommended_doctor_type: DoctorType,
    /// Explanations in rule evaluation order
    pub reasoning: Vec<String>,
    /// Single paragraph summary
    pub summary: String,
}

impl HealthAssessment {
    /// Summary label for the score
    #[must_use]
    pub fn risk_label(&self) -> RiskLabel {
        RiskLabel::from_score(self.health_risk_score)
    }

    /// Whether immediate attention is advised
    #[must_use]
    pub fn is_emergency(&self) -> bool {
        self.urgency_level == UrgencyLevel::Emergency
    }

    /// Serialize to pretty-printed JSON with camelCase keys
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
