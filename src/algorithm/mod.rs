//! Algorithm implementations for health assessment
//!
//! This module contains the scoring algorithms: rule-based risk scoring
//! and sleep scoring.

pub mod health;
