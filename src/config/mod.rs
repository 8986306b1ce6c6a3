//! Configuration for the `RiskScorer`.

use crate::error::{HealthRiskError, Result};

/// Configuration for the `RiskScorer`
///
/// The default values are the reference scoring rules. Summary label
/// thresholds live in the summary module and do not follow these.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Clamped score at or above which the urgency is `Emergency`
    pub emergency_threshold: u8,
    /// Clamped score at or above which the urgency is `Monitor`
    pub monitor_threshold: u8,
    /// Sleep scores below this value count as low sleep
    pub low_sleep_threshold: i32,
    /// Points added for low sleep
    pub low_sleep_penalty: f64,
    /// Sleep scores below this value (but not low) count as moderate sleep
    pub moderate_sleep_threshold: i32,
    /// Points added for moderate sleep
    pub moderate_sleep_penalty: f64,
    /// Points added for smoking
    pub smoking_penalty: f64,
    /// Points added for alcohol consumption
    pub alcohol_penalty: f64,
    /// Points added for a sedentary activity level
    pub sedentary_penalty: f64,
    /// Ages strictly above this value get the senior penalty
    pub senior_age: u32,
    /// Points added for senior age
    pub senior_age_penalty: f64,
    /// Ages strictly above this value (but not senior) get the middle age penalty
    pub middle_age: u32,
    /// Points added for middle age
    pub middle_age_penalty: f64,
    /// Log every score contribution at debug level
    pub log_contributions: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            emergency_threshold: 70,
            monitor_threshold: 40,
            low_sleep_threshold: 50,
            low_sleep_penalty: 15.0,
            moderate_sleep_threshold: 70,
            moderate_sleep_penalty: 8.0,
            smoking_penalty: 15.0,
            alcohol_penalty: 8.0,
            sedentary_penalty: 10.0,
            senior_age: 60,
            senior_age_penalty: 15.0,
            middle_age: 45,
            middle_age_penalty: 8.0,
            log_contributions: true,
        }
    }
}

impl ScoringConfig {
    /// Check that the thresholds are ordered and the penalties are usable
    pub fn validate(&self) -> Result<()> {
        if self.monitor_threshold == 0 || self.monitor_threshold >= self.emergency_threshold {
            return Err(HealthRiskError::invalid_config(format!(
                "monitor threshold {} must be positive and below emergency threshold {}",
                self.monitor_threshold, self.emergency_threshold
            )));
        }

        if self.emergency_threshold > 100 {
            return Err(HealthRiskError::invalid_config(format!(
                "emergency threshold {} exceeds the maximum score of 100",
                self.emergency_threshold
            )));
        }

        if self.moderate_sleep_threshold < self.low_sleep_threshold {
            return Err(HealthRiskError::invalid_config(format!(
                "moderate sleep threshold {} is below low sleep threshold {}",
                self.moderate_sleep_threshold, self.low_sleep_threshold
            )));
        }

        if self.senior_age < self.middle_age {
            return Err(HealthRiskError::invalid_config(format!(
                "senior age {} is below middle age {}",
                self.senior_age, self.middle_age
            )));
        }

        let penalties = [
            ("low_sleep_penalty", self.low_sleep_penalty),
            ("moderate_sleep_penalty", self.moderate_sleep_penalty),
            ("smoking_penalty", self.smoking_penalty),
            ("alcohol_penalty", self.alcohol_penalty),
            ("sedentary_penalty", self.sedentary_penalty),
            ("senior_age_penalty", self.senior_age_penalty),
            ("middle_age_penalty", self.middle_age_penalty),
        ];
        for (name, value) in penalties {
            if !value.is_finite() || value < 0.0 {
                return Err(HealthRiskError::invalid_config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
