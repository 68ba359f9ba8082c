//! Error types for configuration validation and loading.

use thiserror::Error;

/// Error codes for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Duration is zero, negative, or not finite
    NonPositiveDuration,
    /// E002: Sample rate is zero
    ZeroSampleRate,
    /// E003: Heart rate is zero
    ZeroHeartRate,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::NonPositiveDuration => "E001",
            ErrorCode::ZeroSampleRate => "E002",
            ErrorCode::ZeroHeartRate => "E003",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Heart rate outside the usual monitor range
    HeartRateOutOfRange,
    /// W002: Heart rate changed by the pattern's clamp
    HeartRateClamped,
    /// W003: Sample rate too low to resolve the QRS complex
    LowSampleRate,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::HeartRateOutOfRange => "W001",
            WarningCode::HeartRateClamped => "W002",
            WarningCode::LowSampleRate => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Name of the problematic field (e.g., "duration_seconds").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a field path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Name of the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a field path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Validation failed with one or more errors.
    #[error("config validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result of configuration validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self::default()
    }

    /// Returns true if validation passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if validation failed.
    pub fn is_err(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Adds an error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Converts into a `Result`, failing with the error count.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.is_ok() {
            Ok(self.warnings)
        } else {
            Err(ConfigError::ValidationFailed(self.errors.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_with_path() {
        let err = ValidationError::with_path(
            ErrorCode::ZeroSampleRate,
            "sample rate must be positive",
            "sample_rate_hz",
        );
        assert_eq!(
            err.to_string(),
            "E002: sample rate must be positive (at sample_rate_hz)"
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = ValidationWarning::new(WarningCode::HeartRateClamped, "raised to 120");
        assert_eq!(warning.to_string(), "W002: raised to 120");
    }

    #[test]
    fn test_into_result() {
        let mut result = ValidationResult::success();
        result.add_warning(ValidationWarning::new(WarningCode::LowSampleRate, "slow"));
        assert_eq!(result.clone().into_result().unwrap().len(), 1);

        result.add_error(ValidationError::new(ErrorCode::ZeroHeartRate, "zero"));
        let err = result.into_result().unwrap_err();
        assert_eq!(err.to_string(), "config validation failed with 1 error(s)");
    }
}
