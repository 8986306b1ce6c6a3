//! Health models
//!
//! Input and output records for risk scoring.

pub mod assessment;
pub mod input;

pub use assessment::HealthAssessment;
pub use input::HealthInput;
