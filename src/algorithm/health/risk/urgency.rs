//! Urgency levels and doctor recommendations
//!
//! This module defines the triage vocabulary produced by the risk scorer.

use crate::error::HealthRiskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse triage classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    /// Stable, no follow-up needed
    Normal,
    /// Follow-up with a doctor advised
    Monitor,
    /// Immediate attention advised
    Emergency,
}

impl UrgencyLevel {
    /// Get the wire name for this urgency level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Monitor => "monitor",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = HealthRiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "monitor" => Ok(Self::Monitor),
            "emergency" => Ok(Self::Emergency),
            _ => Err(HealthRiskError::UnknownUrgencyLevel(s.to_string())),
        }
    }
}

/// Specialist recommended after an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DoctorType {
    /// General practice
    #[default]
    #[serde(rename = "General Physician")]
    GeneralPhysician,
    /// Heart specialist
    #[serde(rename = "Cardiologist")]
    Cardiologist,
    /// Lung specialist
    #[serde(rename = "Pulmonologist")]
    Pulmonologist,
    /// Emergency department
    #[serde(rename = "Emergency Medicine Specialist")]
    EmergencyMedicine,
}

impl DoctorType {
    /// Get the display name for this doctor type
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GeneralPhysician => "General Physician",
            Self::Cardiologist => "Cardiologist",
            Self::Pulmonologist => "Pulmonologist",
            Self::EmergencyMedicine => "Emergency Medicine Specialist",
        }
    }
}

impl fmt::Display for DoctorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
