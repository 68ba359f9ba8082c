//! Atrial and ventricular fibrillation.

use rand::RngCore;

use crate::cycle::narrow_complex;
use crate::rng::centered_noise;
use crate::timing::BeatTiming;

use super::{beat_interval, render_beats, Rendered, RhythmSynth};

/// Peak-to-peak span of the fibrillating atrial baseline.
pub const ATRIAL_NOISE_SPAN: f64 = 0.1;

/// Peak-to-peak span of the noise riding on ventricular fibrillation.
pub const VENTRICULAR_NOISE_SPAN: f64 = 0.5;

/// Irregularly irregular rhythm over a noisy baseline.
///
/// Beat boundaries drift by a random 70-130% of the base RR interval, while
/// the complex itself is drawn from the base-interval phase clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AtrialFibrillation {
    /// Base heart rate in bpm.
    pub bpm: u32,
}

impl AtrialFibrillation {
    /// Creates the strategy.
    pub fn new(bpm: u32) -> Self {
        Self { bpm }
    }
}

impl RhythmSynth for AtrialFibrillation {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut dyn RngCore) -> Rendered {
        let timing = BeatTiming::irregular(beat_interval(sample_rate, self.bpm));
        render_beats(num_samples, timing, rng, |pos, rng| {
            narrow_complex(pos.phase) + centered_noise(rng, ATRIAL_NOISE_SPAN)
        })
    }
}

/// Chaotic ventricular activity: two detuned sinusoids plus noise, no beats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VentricularFibrillation;

impl VentricularFibrillation {
    /// Deterministic part of the signal at sample `index`.
    pub fn carrier(index: usize) -> f64 {
        let i = index as f64;
        (i * 0.3).sin() * 0.4 + (i * 0.7).sin() * 0.3
    }
}

impl RhythmSynth for VentricularFibrillation {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64, rng: &mut dyn RngCore) -> Rendered {
        Rendered {
            amplitudes: (0..num_samples)
                .map(|i| Self::carrier(i) + centered_noise(&mut *rng, VENTRICULAR_NOISE_SPAN))
                .collect(),
            onsets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_afib_is_reproducible() {
        let a = AtrialFibrillation::new(80).synthesize(2000, 200.0, &mut create_rng(42));
        let b = AtrialFibrillation::new(80).synthesize(2000, 200.0, &mut create_rng(42));
        let c = AtrialFibrillation::new(80).synthesize(2000, 200.0, &mut create_rng(43));
        assert_eq!(a, b);
        assert_ne!(a.amplitudes, c.amplitudes);
    }

    #[test]
    fn test_afib_noise_is_bounded() {
        let mut rng = create_rng(8);
        let rendered = AtrialFibrillation::new(75).synthesize(4000, 200.0, &mut rng);
        let interval = beat_interval(200.0, 75);
        for (i, amplitude) in rendered.amplitudes.iter().enumerate() {
            let clean = narrow_complex((i as f64 % interval) / interval);
            assert!((amplitude - clean).abs() <= 0.05 + 1e-12, "sample {}", i);
        }
    }

    #[test]
    fn test_afib_onsets_are_irregular() {
        let mut rng = create_rng(21);
        let rendered = AtrialFibrillation::new(60).synthesize(20_000, 200.0, &mut rng);
        let spacings: Vec<usize> = rendered
            .onsets
            .windows(2)
            .map(|p| p[1].index - p[0].index)
            .collect();
        assert!(spacings.iter().all(|&s| (140..=261).contains(&s)));
        assert!(spacings.iter().any(|&s| s != spacings[0]));
        assert!(rendered.onsets.iter().all(|o| !o.ectopic));
    }

    #[test]
    fn test_vfib_bounds() {
        let mut rng = create_rng(3);
        let rendered = VentricularFibrillation.synthesize(10_000, 200.0, &mut rng);
        assert!(rendered.onsets.is_empty());
        assert!(rendered.amplitudes.iter().all(|a| a.abs() <= 0.95));
    }

    #[test]
    fn test_vfib_carrier() {
        assert_eq!(VentricularFibrillation::carrier(0), 0.0);
        let expected = 0.3f64.sin() * 0.4 + 0.7f64.sin() * 0.3;
        assert!((VentricularFibrillation::carrier(1) - expected).abs() < 1e-12);
    }
}
