//! Sleep score calculation
//!
//! Derives a 0-100 sleep score from hours slept and a self-reported quality
//! label. Hours pick a base score; the quality label adds a bonus.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest possible sleep score
pub const MAX_SLEEP_SCORE: u32 = 100;

/// Self-reported sleep quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    /// Poor sleep
    Poor,
    /// Average sleep
    Average,
    /// Good sleep
    Good,
    /// Excellent sleep
    Excellent,
}

impl SleepQuality {
    /// Parse a quality label, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "average" => Some(Self::Average),
            "poor" => Some(Self::Poor),
            _ => None,
        }
    }

    /// Bonus points added to the base sleep score
    #[must_use]
    pub const fn bonus(self) -> u32 {
        match self {
            Self::Excellent => 30,
            Self::Good => 20,
            Self::Average => 10,
            Self::Poor => 0,
        }
    }

    /// Get the lowercase label for this quality
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base score for the hours slept
///
/// Bands are checked in priority order and the first match wins:
/// 7-9 h, then [6, 7), then (9, 10], then [5, 6), then above 10, then the rest.
#[must_use]
pub fn hours_base_score(hours: f64) -> u32 {
    if (7.0..=9.0).contains(&hours) {
        70
    } else if (6.0..7.0).contains(&hours) {
        55
    } else if hours > 9.0 && hours <= 10.0 {
        60
    } else if (5.0..6.0).contains(&hours) {
        40
    } else if hours > 10.0 {
        45
    } else {
        // Under 5 hours, negative or NaN
        25
    }
}

/// Calculate a sleep score from hours slept and a quality label
///
/// Unrecognized quality labels add no bonus. The result never exceeds 100.
#[must_use]
pub fn calculate_sleep_score(hours: f64, quality: &str) -> u32 {
    let bonus = SleepQuality::from_label(quality).map_or(0, SleepQuality::bonus);
    (hours_base_score(hours) + bonus).min(MAX_SLEEP_SCORE)
}
