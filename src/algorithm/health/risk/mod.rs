//! Rule-based health risk scoring
//!
//! This module implements the risk scorer that turns a `HealthInput` into a
//! `HealthAssessment`. Scoring walks a fixed sequence of rules; each rule may
//! add points to a running score and append one reasoning entry. The final
//! score is rounded and clamped to 0-100 before urgency classification.

pub mod summary;
pub mod urgency;
pub mod weights;

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::models::health::{HealthAssessment, HealthInput};
use log::debug;
use summary::compose_summary;
use urgency::{DoctorType, UrgencyLevel};
use weights::{ASTHMA, CHEST_TIGHTNESS, HEART_DISEASE, diagnosis_risk, symptom_weight};

/// Lowest possible risk score
pub const MIN_RISK_SCORE: u8 = 0;

/// Highest possible risk score
pub const MAX_RISK_SCORE: u8 = 100;

/// Reasoning entry appended for emergency urgency
pub const EMERGENCY_WARNING: &str =
    "Warning: your symptoms and risk factors indicate a potential emergency. Seek medical attention immediately";

/// Rule-based risk scorer
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScoringConfig,
}

/// Running score and reasoning while rules are applied
struct Accumulator {
    score: f64,
    reasoning: Vec<String>,
    log_contributions: bool,
}

impl Accumulator {
    fn add(&mut self, rule: &str, points: f64, note: String) {
        self.score += points;
        if self.log_contributions {
            debug!("{rule}: +{points:.2} (running score {:.2})", self.score);
        }
        self.reasoning.push(note);
    }
}

impl RiskScorer {
    /// Create a scorer with a validated configuration
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Analyze a health input
    ///
    /// Total over every input: unknown symptoms and diagnoses fall back to
    /// default weights and missing optional fields contribute nothing.
    #[must_use]
    pub fn analyze(&self, input: &HealthInput) -> HealthAssessment {
        let Accumulator { score, mut reasoning, .. } = self.accumulate(input);

        let health_risk_score = clamp_score(score);
        let (urgency_level, recommended_doctor_type) = self.classify(health_risk_score, input);

        reasoning.push(match urgency_level {
            UrgencyLevel::Emergency => EMERGENCY_WARNING.to_string(),
            UrgencyLevel::Monitor => format!(
                "Monitoring advised: consider an appointment with a {recommended_doctor_type}"
            ),
            UrgencyLevel::Normal => "Overall health status appears stable".to_string(),
        });

        debug!(
            "Classified score {health_risk_score} (raw {score:.2}) as {urgency_level}, recommending {recommended_doctor_type}"
        );

        let summary = compose_summary(health_risk_score, input, urgency_level);

        HealthAssessment {
            health_risk_score,
            urgency_level,
            recommended_doctor_type,
            reasoning,
            summary,
        }
    }

    /// Accumulated score before rounding and clamping
    #[must_use]
    pub fn raw_score(&self, input: &HealthInput) -> f64 {
        self.accumulate(input).score
    }

    /// Classify a clamped score into an urgency level and doctor type
    #[must_use]
    pub fn classify(&self, score: u8, input: &HealthInput) -> (UrgencyLevel, DoctorType) {
        let has_chest_tightness = input.has_symptom(CHEST_TIGHTNESS);

        if score >= self.config.emergency_threshold || has_chest_tightness {
            let doctor = if has_chest_tightness {
                DoctorType::Cardiologist
            } else {
                DoctorType::EmergencyMedicine
            };
            (UrgencyLevel::Emergency, doctor)
        } else if score >= self.config.monitor_threshold {
            let doctor = if input.has_past_diagnosis(HEART_DISEASE) {
                DoctorType::Cardiologist
            } else if input.has_past_diagnosis(ASTHMA) {
                DoctorType::Pulmonologist
            } else {
                DoctorType::GeneralPhysician
            };
            (UrgencyLevel::Monitor, doctor)
        } else {
            (UrgencyLevel::Normal, DoctorType::GeneralPhysician)
        }
    }

    fn accumulate(&self, input: &HealthInput) -> Accumulator {
        let config = &self.config;
        let mut acc = Accumulator {
            score: 0.0,
            reasoning: Vec::new(),
            log_contributions: config.log_contributions,
        };

        // Symptoms: one entry for the whole list
        if !input.symptoms.is_empty() {
            let severity_factor = f64::from(input.severity) / 10.0;
            let points: f64 = input
                .symptoms
                .iter()
                .map(|symptom| f64::from(symptom_weight(symptom)) * severity_factor)
                .sum();
            acc.add(
                "symptoms",
                points,
                format!(
                    "Reported {} symptom(s) with severity {}/10",
                    input.symptoms.len(),
                    input.severity
                ),
            );
        }

        // Sleep
        if input.sleep_score < config.low_sleep_threshold {
            acc.add(
                "sleep",
                config.low_sleep_penalty,
                format!("Low sleep score ({}) increases health risk", input.sleep_score),
            );
        } else if input.sleep_score < config.moderate_sleep_threshold {
            acc.add(
                "sleep",
                config.moderate_sleep_penalty,
                format!(
                    "Moderate sleep score ({}) may affect recovery and wellbeing",
                    input.sleep_score
                ),
            );
        }

        // Past diagnoses, one entry each
        for diagnosis in &input.past_diagnoses {
            acc.add(
                "diagnosis",
                f64::from(diagnosis_risk(diagnosis)),
                format!("Past diagnosis of {diagnosis} adds to the risk profile"),
            );
        }

        // Lifestyle
        if input.smokes() {
            acc.add(
                "smoking",
                config.smoking_penalty,
                "Smoking significantly increases cardiovascular and respiratory risk".to_string(),
            );
        }

        if input.drinks_alcohol() {
            acc.add(
                "alcohol",
                config.alcohol_penalty,
                "Alcohol consumption contributes to elevated health risk".to_string(),
            );
        }

        if input.is_sedentary() {
            acc.add(
                "activity",
                config.sedentary_penalty,
                "A sedentary lifestyle increases the risk of chronic conditions".to_string(),
            );
        }

        // Age
        if let Some(age) = input.age {
            if age > config.senior_age {
                acc.add(
                    "age",
                    config.senior_age_penalty,
                    format!(
                        "Age over {} is associated with higher health risk",
                        config.senior_age
                    ),
                );
            } else if age > config.middle_age {
                acc.add(
                    "age",
                    config.middle_age_penalty,
                    format!(
                        "Age over {} is associated with moderately increased health risk",
                        config.middle_age
                    ),
                );
            }
        }

        acc
    }
}

/// Round to the nearest integer, then clamp to 0-100
#[must_use]
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return MIN_RISK_SCORE;
    }
    raw.round()
        .clamp(f64::from(MIN_RISK_SCORE), f64::from(MAX_RISK_SCORE)) as u8
}

/// Analyze a health input with the default scoring rules
#[must_use]
pub fn analyze_health(input: &HealthInput) -> HealthAssessment {
    RiskScorer::default().analyze(input)
}
