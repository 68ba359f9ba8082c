//! Asystole.

use rand::RngCore;

use crate::rng::centered_noise;

use super::{Rendered, RhythmSynth};

/// Peak-to-peak span of the residual baseline noise.
pub const ASYSTOLE_NOISE_SPAN: f64 = 0.02;

/// Flat line with near-zero noise and no beats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Asystole;

impl RhythmSynth for Asystole {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64, rng: &mut dyn RngCore) -> Rendered {
        Rendered {
            amplitudes: (0..num_samples)
                .map(|_| centered_noise(&mut *rng, ASYSTOLE_NOISE_SPAN))
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
    fn test_stays_near_zero() {
        let mut rng = create_rng(11);
        let rendered = Asystole.synthesize(5000, 200.0, &mut rng);
        assert_eq!(rendered.amplitudes.len(), 5000);
        assert!(rendered.onsets.is_empty());
        assert!(rendered.amplitudes.iter().all(|a| a.abs() <= 0.01));
        // Not a perfect flat line
        assert!(rendered.amplitudes.iter().any(|a| *a != 0.0));
    }
}
