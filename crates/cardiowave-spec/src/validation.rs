//! Configuration validation logic.
//!
//! Generation itself never rejects a configuration; degenerate windows just
//! come out empty. Validation is for callers that want to surface problems
//! before rendering (the CLI's `validate` command and strict generation).

use crate::config::GeneratorConfig;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};

/// Slowest rate a bedside monitor slider usually offers.
pub const MONITOR_MIN_BPM: u32 = 30;

/// Fastest rate a bedside monitor slider usually offers.
pub const MONITOR_MAX_BPM: u32 = 200;

/// Below this rate the 10%-of-beat QRS complex spans only a handful of samples.
pub const MIN_RECOMMENDED_SAMPLE_RATE_HZ: u32 = 50;

/// Validates a generator configuration.
///
/// # Example
/// ```
/// use cardiowave_spec::{GeneratorConfig, Pattern};
/// use cardiowave_spec::validation::validate_config;
///
/// let config = GeneratorConfig::new(Pattern::NormalSinus, 72);
/// assert!(validate_config(&config).is_ok());
///
/// let config = config.duration_seconds(0.0);
/// assert!(validate_config(&config).is_err());
/// ```
pub fn validate_config(config: &GeneratorConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_duration(config, &mut result);
    validate_sample_rate(config, &mut result);
    validate_heart_rate(config, &mut result);

    result
}

fn validate_duration(config: &GeneratorConfig, result: &mut ValidationResult) {
    if !config.duration_seconds.is_finite() || config.duration_seconds <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonPositiveDuration,
            format!(
                "duration must be a positive number of seconds, got {}",
                config.duration_seconds
            ),
            "duration_seconds",
        ));
    }
}

fn validate_sample_rate(config: &GeneratorConfig, result: &mut ValidationResult) {
    if config.sample_rate_hz == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::ZeroSampleRate,
            "sample rate must be positive",
            "sample_rate_hz",
        ));
    } else if config.sample_rate_hz < MIN_RECOMMENDED_SAMPLE_RATE_HZ {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::LowSampleRate,
            format!(
                "{} Hz is below {} Hz; QRS complexes will be poorly resolved",
                config.sample_rate_hz, MIN_RECOMMENDED_SAMPLE_RATE_HZ
            ),
            "sample_rate_hz",
        ));
    }
}

fn validate_heart_rate(config: &GeneratorConfig, result: &mut ValidationResult) {
    let bpm = config.heart_rate_bpm;

    // Rate-less rhythms ignore the heart rate entirely.
    if !config.pattern.has_beat_structure() {
        return;
    }

    if bpm == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::ZeroHeartRate,
            "heart rate must be positive",
            "heart_rate_bpm",
        ));
        return;
    }

    if !(MONITOR_MIN_BPM..=MONITOR_MAX_BPM).contains(&bpm) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::HeartRateOutOfRange,
            format!(
                "{} bpm is outside the {}-{} bpm monitor range",
                bpm, MONITOR_MIN_BPM, MONITOR_MAX_BPM
            ),
            "heart_rate_bpm",
        ));
    }

    let effective = config.effective_heart_rate();
    if effective != bpm {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::HeartRateClamped,
            format!(
                "{} clamps {} bpm to {} bpm",
                config.pattern.display_name(),
                bpm,
                effective
            ),
            "heart_rate_bpm",
        ));
    }
}
