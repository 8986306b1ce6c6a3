//! Health input model
//!
//! The structured record a caller hands to the risk scorer. Inputs are
//! created fresh for each assessment and never mutated by scoring.

use crate::error::{HealthRiskError, Result};
use serde::{Deserialize, Serialize};

/// Activity level string that triggers the sedentary lifestyle rule
pub const SEDENTARY: &str = "sedentary";

/// Structured health input for a single assessment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthInput {
    /// Symptom identifiers in reported order, duplicates allowed
    pub symptoms: Vec<String>,
    /// Overall symptom severity, expected 0-10
    pub severity: i32,
    /// Sleep score, expected 0-100
    pub sleep_score: i32,
    /// Known allergies. Accepted for shape compatibility, not used in scoring
    pub allergies: Vec<String>,
    /// Names of past diagnoses in reported order
    pub past_diagnoses: Vec<String>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Whether the person smokes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<bool>,
    /// Whether the person drinks alcohol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<bool>,
    /// Free-form activity level, compared against "sedentary"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
}

impl HealthInput {
    /// Create a new input with the required fields
    #[must_use]
    pub fn new(symptoms: Vec<String>, severity: i32, sleep_score: i32) -> Self {
        Self {
            symptoms,
            severity,
            sleep_score,
            ..Self::default()
        }
    }

    /// Set the past diagnoses
    #[must_use]
    pub fn with_past_diagnoses(mut self, past_diagnoses: Vec<String>) -> Self {
        self.past_diagnoses = past_diagnoses;
        self
    }

    /// Set the allergies
    #[must_use]
    pub fn with_allergies(mut self, allergies: Vec<String>) -> Self {
        self.allergies = allergies;
        self
    }

    /// Set the age
    #[must_use]
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the smoking flag
    #[must_use]
    pub fn with_smoking(mut self, smoking: bool) -> Self {
        self.smoking = Some(smoking);
        self
    }

    /// Set the alcohol flag
    #[must_use]
    pub fn with_alcohol(mut self, alcohol: bool) -> Self {
        self.alcohol = Some(alcohol);
        self
    }

    /// Set the activity level
    #[must_use]
    pub fn with_activity_level<S: Into<String>>(mut self, activity_level: S) -> Self {
        self.activity_level = Some(activity_level.into());
        self
    }

    /// Whether the smoking flag is set and true
    #[must_use]
    pub fn smokes(&self) -> bool {
        self.smoking.unwrap_or(false)
    }

    /// Whether the alcohol flag is set and true
    #[must_use]
    pub fn drinks_alcohol(&self) -> bool {
        self.alcohol.unwrap_or(false)
    }

    /// Whether the activity level is exactly "sedentary"
    #[must_use]
    pub fn is_sedentary(&self) -> bool {
        self.activity_level.as_deref() == Some(SEDENTARY)
    }

    /// Whether a symptom identifier was reported
    #[must_use]
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom)
    }

    /// Whether a diagnosis name appears among the past diagnoses
    #[must_use]
    pub fn has_past_diagnosis(&self, diagnosis: &str) -> bool {
        self.past_diagnoses.iter().any(|d| d == diagnosis)
    }

    /// Parse an input from a JSON object with camelCase keys
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the input against its declared ranges
    ///
    /// Scoring never calls this and accepts any input; it is offered for
    /// callers that want to reject out-of-range values up front.
    pub fn validate(&self) -> Result<()> {
        if !(0..=10).contains(&self.severity) {
            return Err(HealthRiskError::invalid_input(format!(
                "severity {} is outside 0..=10",
                self.severity
            )));
        }

        if !(0..=100).contains(&self.sleep_score) {
            return Err(HealthRiskError::invalid_input(format!(
                "sleep score {} is outside 0..=100",
                self.sleep_score
            )));
        }

        if let Some(position) = self.symptoms.iter().position(|s| s.trim().is_empty()) {
            return Err(HealthRiskError::invalid_input(format!(
                "symptom at position {position} is empty"
            )));
        }

        Ok(())
    }
}
