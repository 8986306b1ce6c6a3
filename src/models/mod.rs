//! Data models
//!
//! Records exchanged with callers of the scoring functions.

pub mod health;

pub use health::{HealthAssessment, HealthInput};
