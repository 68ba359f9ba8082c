//! Error types for strict ECG generation.

use thiserror::Error;

/// Result type for strict generation.
pub type EcgResult<T> = Result<T, EcgError>;

/// Reasons strict generation refuses a configuration.
///
/// The lenient [`generate`](crate::generate()) entry point never produces
/// these; it renders an empty window instead.
#[derive(Debug, Error)]
pub enum EcgError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid heart rate.
    #[error("invalid heart rate: {bpm} bpm")]
    InvalidHeartRate {
        /// The invalid heart rate.
        bpm: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl EcgError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            EcgError::InvalidSampleRate { .. } => "ECG_001",
            EcgError::InvalidDuration { .. } => "ECG_002",
            EcgError::InvalidHeartRate { .. } => "ECG_003",
            EcgError::InvalidParameter { .. } => "ECG_004",
        }
    }
}
