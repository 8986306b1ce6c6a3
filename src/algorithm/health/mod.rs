//! Health scoring algorithms
//!
//! This module implements the rule-based risk scorer and the sleep score
//! calculator.

pub mod risk;
pub mod sleep;

// Re-export common types from the risk module
pub use risk::summary::RiskLabel;
pub use risk::urgency::{DoctorType, UrgencyLevel};
pub use risk::{RiskScorer, analyze_health};
pub use sleep::{SleepQuality, calculate_sleep_score};
