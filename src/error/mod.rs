//! Error handling for the health risk library.
//!
//! The scoring operations themselves are total and never fail. Errors only
//! come from the surfaces around them: input validation, scorer
//! configuration, parsing of vocabulary strings and JSON conversion.

/// Specialized error type for the health risk library
#[derive(Debug, thiserror::Error)]
pub enum HealthRiskError {
    /// A health input failed caller-side validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A scoring configuration is internally inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An urgency level string did not match any known level
    #[error("Unknown urgency level: {0}")]
    UnknownUrgencyLevel(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HealthRiskError {
    /// Create a new input validation error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type for health risk operations
pub type Result<T> = std::result::Result<T, HealthRiskError>;
