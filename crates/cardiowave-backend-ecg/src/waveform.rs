//! Materialized waveform result.

use cardiowave_spec::{Pattern, Sample};
use serde::Serialize;

use crate::synthesis::Rendered;

/// A beat onset annotated onto the waveform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeatMarker {
    /// Sample index of the onset.
    pub index: usize,
    /// Onset time in seconds.
    pub time: f64,
    /// Whether the beat is an ectopic (wide) complex.
    pub ectopic: bool,
}

/// A complete generated window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waveform {
    /// Rhythm that was synthesized.
    pub pattern: Pattern,
    /// Heart rate actually used, after the pattern's clamp.
    pub heart_rate_bpm: u32,
    /// Samples per second.
    pub sample_rate_hz: u32,
    /// Samples in time order, spaced `1 / sample_rate_hz` apart.
    pub samples: Vec<Sample>,
    /// Beat onsets in time order; empty for rhythms without beats.
    pub beats: Vec<BeatMarker>,
}

impl Waveform {
    /// Attaches times to a strategy's raw output.
    pub(crate) fn from_rendered(
        pattern: Pattern,
        heart_rate_bpm: u32,
        sample_rate_hz: u32,
        rendered: Rendered,
    ) -> Self {
        let samples = rendered
            .amplitudes
            .into_iter()
            .enumerate()
            .map(|(i, amplitude)| Sample::at_index(i, sample_rate_hz, amplitude))
            .collect();
        let beats = rendered
            .onsets
            .into_iter()
            .map(|onset| BeatMarker {
                index: onset.index,
                time: onset.index as f64 / sample_rate_hz as f64,
                ectopic: onset.ectopic,
            })
            .collect();

        Self {
            pattern,
            heart_rate_bpm,
            sample_rate_hz,
            samples,
            beats,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Amplitudes without their timestamps.
    pub fn amplitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.amplitude).collect()
    }

    /// Window length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate_hz == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate_hz as f64
    }

    /// Largest absolute amplitude, or 0.0 for an empty window.
    pub fn peak_amplitude(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.amplitude.abs())
            .fold(0.0_f64, f64::max)
    }

    /// Number of ectopic beats.
    pub fn ectopic_count(&self) -> usize {
        self.beats.iter().filter(|b| b.ectopic).count()
    }

    /// BLAKE3 hash of the amplitudes (little-endian f64 bytes), hex encoded.
    pub fn pcm_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for sample in &self.samples {
            hasher.update(&sample.amplitude.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::Onset;

    fn rendered() -> Rendered {
        Rendered {
            amplitudes: vec![0.0, 0.5, -0.75, 0.25],
            onsets: vec![
                Onset {
                    index: 0,
                    ectopic: false,
                },
                Onset {
                    index: 2,
                    ectopic: true,
                },
            ],
        }
    }

    #[test]
    fn test_from_rendered_times() {
        let wave = Waveform::from_rendered(Pattern::NormalSinus, 60, 4, rendered());
        let times: Vec<f64> = wave.samples.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(wave.beats[1].time, 0.5);
        assert!(wave.beats[1].ectopic);
    }

    #[test]
    fn test_summary_accessors() {
        let wave = Waveform::from_rendered(Pattern::VentricularExtrasystole, 60, 4, rendered());
        assert_eq!(wave.len(), 4);
        assert!(!wave.is_empty());
        assert_eq!(wave.duration_seconds(), 1.0);
        assert_eq!(wave.peak_amplitude(), 0.75);
        assert_eq!(wave.ectopic_count(), 1);
        assert_eq!(wave.amplitudes(), vec![0.0, 0.5, -0.75, 0.25]);
    }

    #[test]
    fn test_pcm_hash_format() {
        let wave = Waveform::from_rendered(Pattern::NormalSinus, 60, 4, rendered());
        let hash = wave.pcm_hash();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, wave.clone().pcm_hash());
    }

    #[test]
    fn test_empty_window() {
        let wave = Waveform::from_rendered(Pattern::Asystole, 75, 200, Rendered::default());
        assert!(wave.is_empty());
        assert_eq!(wave.peak_amplitude(), 0.0);
        assert_eq!(wave.duration_seconds(), 0.0);
    }

    #[test]
    fn test_json_serialization() {
        let wave = Waveform::from_rendered(Pattern::VentricularExtrasystole, 60, 4, rendered());
        let value = serde_json::to_value(&wave).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "pattern": "ves",
                "heart_rate_bpm": 60,
                "sample_rate_hz": 4,
                "samples": [
                    {"time": 0.0, "amplitude": 0.0},
                    {"time": 0.25, "amplitude": 0.5},
                    {"time": 0.5, "amplitude": -0.75},
                    {"time": 0.75, "amplitude": 0.25}
                ],
                "beats": [
                    {"index": 0, "time": 0.0, "ectopic": false},
                    {"index": 2, "time": 0.5, "ectopic": true}
                ]
            })
        );
    }
}
