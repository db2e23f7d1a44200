//! Error types.
//!
//! - `EstimateError`: failures of the estimation core (sampling, seeding, search).
//! - `AppError`: what the binary reports, carrying the process exit code.

/// Errors raised by the vocd-D estimation core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// A segment cannot be drawn without replacement from fewer tokens.
    #[error("Segment size {segment_size} exceeds the {available} available tokens.")]
    InsufficientTokens { segment_size: usize, available: usize },

    /// Too few observations with a defined D to seed the search.
    #[error(
        "Not enough usable observations: {discarded} of {total} had TTR = 1; at least two defined D values are required."
    )]
    NotEnoughObservations { total: usize, discarded: usize },

    /// The bounded walk left `(0, 2 * seed)` without finding a local minimum.
    #[error("D search did not converge: seed={seed:.3}, walk stopped at {last:.3}.")]
    NonConvergence { seed: f64, last: f64 },

    #[error("Invalid sample-size range: from={from}, to={to}, step={step} (need 1 <= from <= to, step >= 1).")]
    InvalidRange { from: usize, to: usize, step: usize },

    #[error("Declared token count {declared} does not match the {actual} tokens supplied.")]
    TokenCountMismatch { declared: usize, actual: usize },
}

impl EstimateError {
    /// Exit code used when this error reaches the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            EstimateError::InvalidRange { .. } | EstimateError::TokenCountMismatch { .. } => 2,
            EstimateError::InsufficientTokens { .. } | EstimateError::NotEnoughObservations { .. } => 3,
            EstimateError::NonConvergence { .. } => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_errors_map_to_exit_codes() {
        let err: AppError = EstimateError::InsufficientTokens {
            segment_size: 35,
            available: 10,
        }
        .into();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("35"));

        let err: AppError = EstimateError::NonConvergence { seed: 1.0, last: 2.0 }.into();
        assert_eq!(err.exit_code(), 4);

        let err: AppError = EstimateError::InvalidRange { from: 0, to: 5, step: 1 }.into();
        assert_eq!(err.exit_code(), 2);
    }
}
