//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pattern::{self, Pattern};

/// Heart rate used when none is given (bpm).
pub const DEFAULT_HEART_RATE_BPM: u32 = 75;

/// Window length used when none is given (seconds).
pub const DEFAULT_DURATION_SECONDS: f64 = 10.0;

/// Sample rate used when none is given (Hz).
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 200;

/// Parameters for a single waveform generation call.
///
/// The heart rate is advisory: strategies apply the pattern's
/// [`RateClamp`](crate::RateClamp) before computing beat intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct GeneratorConfig {
    /// Rhythm to synthesize. Unknown identifiers deserialize as `normal`.
    #[serde(deserialize_with = "pattern::deserialize_lenient")]
    pub pattern: Pattern,
    /// Requested heart rate in beats per minute.
    pub heart_rate_bpm: u32,
    /// Window length in seconds.
    pub duration_seconds: f64,
    /// Samples per second.
    pub sample_rate_hz: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pattern: Pattern::NormalSinus,
            heart_rate_bpm: DEFAULT_HEART_RATE_BPM,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with the default window (10 s at 200 Hz).
    pub fn new(pattern: Pattern, heart_rate_bpm: u32) -> Self {
        Self {
            pattern,
            heart_rate_bpm,
            ..Self::default()
        }
    }

    /// Sets the pattern.
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Sets the requested heart rate.
    pub fn heart_rate_bpm(mut self, bpm: u32) -> Self {
        self.heart_rate_bpm = bpm;
        self
    }

    /// Sets the window length.
    pub fn duration_seconds(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Sets the sample rate.
    pub fn sample_rate_hz(mut self, hz: u32) -> Self {
        self.sample_rate_hz = hz;
        self
    }

    /// Number of samples the window holds: `round(duration * rate)`.
    ///
    /// Zero when the product is non-positive or not finite.
    pub fn sample_count(&self) -> usize {
        let n = self.duration_seconds * self.sample_rate_hz as f64;
        if !n.is_finite() || n <= 0.0 {
            return 0;
        }
        n.round() as usize
    }

    /// Heart rate after the pattern's clamp has been applied.
    pub fn effective_heart_rate(&self) -> u32 {
        self.pattern.rate_clamp().apply(self.heart_rate_bpm)
    }

    /// Samples per beat at the effective heart rate.
    pub fn beat_interval_samples(&self) -> f64 {
        self.sample_rate_hz as f64 * 60.0 / self.effective_heart_rate() as f64
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
