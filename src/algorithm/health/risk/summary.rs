//! Summary composition
//!
//! Builds the single-paragraph summary of an assessment. The score label
//! buckets here (30/60/80) are independent of the urgency thresholds, so a
//! score of 75 reads "elevated" while being classified as `Emergency`.

use super::urgency::UrgencyLevel;
use crate::models::health::HealthInput;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sleep scores below this value add a sleep clause to the summary
const SLEEP_ATTENTION_THRESHOLD: i32 = 60;

/// Four-bucket label used in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    /// Score below 30
    Low,
    /// Score below 60
    Moderate,
    /// Score below 80
    Elevated,
    /// Score 80 and above
    High,
}

impl RiskLabel {
    /// Label a clamped risk score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score < 30 {
            Self::Low
        } else if score < 60 {
            Self::Moderate
        } else if score < 80 {
            Self::Elevated
        } else {
            Self::High
        }
    }

    /// Get the lowercase text used in summaries
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Elevated => "elevated",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compose the summary paragraph for a scored input
#[must_use]
pub fn compose_summary(score: u8, input: &HealthInput, urgency: UrgencyLevel) -> String {
    let mut parts = Vec::with_capacity(4);

    parts.push(format!(
        "Your health risk score is {score}/100, which is considered {}.",
        RiskLabel::from_score(score)
    ));

    if !input.symptoms.is_empty() {
        parts.push(format!(
            "You reported {} symptom(s) with a severity of {}/10.",
            input.symptoms.len(),
            input.severity
        ));
    }

    if input.sleep_score < SLEEP_ATTENTION_THRESHOLD {
        parts.push(
            "Your sleep quality needs attention and may be affecting your health.".to_string(),
        );
    }

    parts.push(
        match urgency {
            UrgencyLevel::Emergency => "Please seek immediate medical attention.",
            UrgencyLevel::Monitor => {
                "We recommend scheduling a check-up with a doctor in the coming days."
            }
            UrgencyLevel::Normal => {
                "Keep up your current habits and check in again if anything changes."
            }
        }
        .to_string(),
    );

    parts.join(" ")
}
