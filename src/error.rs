//! Error types for the SampleTask application
//!
//! The flow itself never surfaces errors to the user; these cover the
//! outer shell (configuration, scenarios, the sampler thread).

use thiserror::Error;

/// SampleTask application errors
#[derive(Error, Debug, Clone)]
pub enum SampleTaskError {
    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Scenario file could not be read, parsed or validated
    #[error("Scenario error: {0}")]
    ScenarioError(String),

    /// Noise sampler thread could not be started
    #[error("Sampler error: {0}")]
    SamplerError(String),
}

impl SampleTaskError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors let the app continue with defaults.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Falls back to the default configuration
            SampleTaskError::ConfigError(_) => true,
            // A broken scenario means the automated run is meaningless
            SampleTaskError::ScenarioError(_) => false,
            // The gate stays on its initial reading
            SampleTaskError::SamplerError(_) => true,
        }
    }

    /// Get a user-friendly description of the error
    pub fn user_message(&self) -> String {
        match self {
            SampleTaskError::ConfigError(_) => {
                "Configuration error. Default settings will be used.".to_string()
            }
            SampleTaskError::ScenarioError(_) => {
                "Scenario file is invalid. Please check the file.".to_string()
            }
            SampleTaskError::SamplerError(_) => {
                "Noise check could not start. Please try again.".to_string()
            }
        }
    }
}

/// Result type alias for SampleTask operations
pub type Result<T> = std::result::Result<T, SampleTaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_error_is_fatal() {
        let err = SampleTaskError::ScenarioError("no exit step".to_string());
        assert!(!err.is_recoverable());
        assert!(err.user_message().contains("Scenario file"));
    }

    #[test]
    fn test_config_error_is_recoverable() {
        let err = SampleTaskError::ConfigError("bad cadence".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Configuration error: bad cadence");
        assert!(err.user_message().contains("Default settings"));
    }
}
