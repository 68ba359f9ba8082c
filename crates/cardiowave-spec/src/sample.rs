//! Sample point type.

use serde::{Deserialize, Serialize};

/// A single point of a synthesized waveform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time since the start of the window, in seconds.
    pub time: f64,
    /// Signal amplitude in arbitrary millivolt-like units (R peak = 1.0).
    pub amplitude: f64,
}

impl Sample {
    /// Creates a new sample.
    pub fn new(time: f64, amplitude: f64) -> Self {
        Self { time, amplitude }
    }

    /// Creates the sample at `index` for a given sample rate.
    pub fn at_index(index: usize, sample_rate_hz: u32, amplitude: f64) -> Self {
        Self {
            time: index as f64 / sample_rate_hz as f64,
            amplitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_index_spacing() {
        let a = Sample::at_index(0, 200, 0.0);
        let b = Sample::at_index(1, 200, 0.0);
        let c = Sample::at_index(200, 200, 0.0);
        assert_eq!(a.time, 0.0);
        assert!((b.time - 0.005).abs() < 1e-12);
        assert!((c.time - 1.0).abs() < 1e-12);
    }
}
