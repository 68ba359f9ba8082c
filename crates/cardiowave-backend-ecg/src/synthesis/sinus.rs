//! Regular sinus rhythms.
//!
//! Normal sinus rhythm, tachycardia and bradycardia differ only in rate, so
//! they share one strategy; the rate clamp is applied before construction.
//! ST elevation and depression add a constant offset across the ST window.

use rand::RngCore;

use crate::cycle::narrow_complex;
use crate::timing::BeatTiming;

use super::{beat_interval, render_beats, Rendered, RhythmSynth};

/// Open phase window over which the ST offset applies.
pub const ST_WINDOW: (f64, f64) = (0.3, 0.6);

/// ST offset for ST-elevation rhythms.
pub const ST_ELEVATION_OFFSET: f64 = 0.3;

/// ST offset for ST-depression rhythms.
pub const ST_DEPRESSION_OFFSET: f64 = -0.2;

/// Fixed-interval narrow-complex rhythm.
#[derive(Debug, Clone, PartialEq)]
pub struct SinusRhythm {
    /// Heart rate in bpm (already clamped).
    pub bpm: u32,
    /// Offset added strictly inside [`ST_WINDOW`].
    pub st_offset: f64,
}

impl SinusRhythm {
    /// Creates a plain sinus rhythm.
    pub fn new(bpm: u32) -> Self {
        Self { bpm, st_offset: 0.0 }
    }

    /// Creates a sinus rhythm with ST elevation.
    pub fn st_elevation(bpm: u32) -> Self {
        Self::new(bpm).with_st_offset(ST_ELEVATION_OFFSET)
    }

    /// Creates a sinus rhythm with ST depression.
    pub fn st_depression(bpm: u32) -> Self {
        Self::new(bpm).with_st_offset(ST_DEPRESSION_OFFSET)
    }

    /// Sets the ST offset.
    pub fn with_st_offset(mut self, offset: f64) -> Self {
        self.st_offset = offset;
        self
    }

    fn st_shift(&self, phase: f64) -> f64 {
        if phase > ST_WINDOW.0 && phase < ST_WINDOW.1 {
            self.st_offset
        } else {
            0.0
        }
    }
}

impl RhythmSynth for SinusRhythm {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut dyn RngCore) -> Rendered {
        let timing = BeatTiming::fixed(beat_interval(sample_rate, self.bpm));
        render_beats(num_samples, timing, rng, |pos, _| {
            narrow_complex(pos.phase) + self.st_shift(pos.phase)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_one_beat_per_second_at_60_bpm() {
        let mut rng = create_rng(0);
        let rendered = SinusRhythm::new(60).synthesize(1000, 200.0, &mut rng);
        assert_eq!(rendered.amplitudes.len(), 1000);
        assert_eq!(rendered.onsets.len(), 5);
        assert_eq!(rendered.amplitudes[0], 0.0);
    }

    #[test]
    fn test_periodic() {
        let mut rng = create_rng(0);
        let rendered = SinusRhythm::new(60).synthesize(1000, 200.0, &mut rng);
        for i in 0..800 {
            assert_eq!(rendered.amplitudes[i], rendered.amplitudes[i + 200]);
        }
    }

    #[test]
    fn test_st_offsets_only_inside_window() {
        let mut rng = create_rng(0);
        let plain = SinusRhythm::new(60).synthesize(200, 200.0, &mut rng);
        let up = SinusRhythm::st_elevation(60).synthesize(200, 200.0, &mut rng);
        let down = SinusRhythm::st_depression(60).synthesize(200, 200.0, &mut rng);

        for i in 0..200 {
            let phase = i as f64 / 200.0;
            let inside = phase > 0.3 && phase < 0.6;
            let lift = up.amplitudes[i] - plain.amplitudes[i];
            let drop = down.amplitudes[i] - plain.amplitudes[i];
            if inside {
                assert!((lift - 0.3).abs() < 1e-12, "sample {}", i);
                assert!((drop + 0.2).abs() < 1e-12, "sample {}", i);
            } else {
                assert_eq!(lift, 0.0, "sample {}", i);
                assert_eq!(drop, 0.0, "sample {}", i);
            }
        }
    }

    #[test]
    fn test_window_boundaries_are_open() {
        let rhythm = SinusRhythm::st_elevation(60);
        assert_eq!(rhythm.st_shift(0.3), 0.0);
        assert_eq!(rhythm.st_shift(0.6), 0.0);
        assert_eq!(rhythm.st_shift(0.45), 0.3);
    }
}
