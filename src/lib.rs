//! A Rust library for rule-based health risk scoring.
//!
//! Three pure operations make up the public contract:
//! - [`analyze_health`] scores a [`HealthInput`] and returns a [`HealthAssessment`]
//!   with an urgency level, a recommended doctor, reasoning and a summary.
//! - [`calculate_sleep_score`] turns hours slept and a quality label into a 0-100 score.
//! - [`generate_access_key`] returns a random display key with a placeholder hash.
//!
//! Scores and labels are for display only and are not medical advice.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ScoringConfig;
pub use error::{HealthRiskError, Result};
pub use models::{HealthAssessment, HealthInput};

// Scoring
pub use algorithm::health::{
    DoctorType, RiskLabel, RiskScorer, SleepQuality, UrgencyLevel, analyze_health,
    calculate_sleep_score,
};

// Credentials
pub use utils::{AccessCredential, generate_access_key, generate_access_key_with};
