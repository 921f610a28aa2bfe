//! Error types for input validation and report I/O

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors raised outside the core calculations.
///
/// The projection and payoff functions themselves are total; these errors come
/// from validating user input before calling them, or from reading and writing
/// scenario/report files.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// A user-supplied input is outside its allowed range
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("unknown option type: {0} (expected Call or Put)")]
    UnknownOptionType(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SimulatorError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimulatorError::InvalidInput { field, reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = SimulatorError::invalid("investment_years", "must be at least 1");
        assert_eq!(err.to_string(), "invalid investment_years: must be at least 1");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: SimulatorError = io.into();
        assert!(matches!(err, SimulatorError::Io(_)));
    }
}
