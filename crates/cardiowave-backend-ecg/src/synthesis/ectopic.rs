//! Ventricular extrasystoles.

use rand::RngCore;

use crate::timing::BeatTiming;

use super::{beat_interval, render_beats, shape_for, Rendered, RhythmSynth};

/// Regular rhythm where every fifth beat is a wide ectopic complex.
#[derive(Debug, Clone, PartialEq)]
pub struct VentricularExtrasystole {
    /// Heart rate in bpm.
    pub bpm: u32,
}

impl VentricularExtrasystole {
    /// Creates the strategy.
    pub fn new(bpm: u32) -> Self {
        Self { bpm }
    }
}

impl RhythmSynth for VentricularExtrasystole {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut dyn RngCore) -> Rendered {
        let timing = BeatTiming::ectopic_periodic(beat_interval(sample_rate, self.bpm));
        render_beats(num_samples, timing, rng, |pos, _| shape_for(pos).amplitude(pos.phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::{narrow_complex, wide_complex};
    use crate::rng::create_rng;

    #[test]
    fn test_fifth_beat_is_wide() {
        let mut rng = create_rng(0);
        let rendered = VentricularExtrasystole::new(60).synthesize(2000, 200.0, &mut rng);

        let flags: Vec<bool> = rendered.onsets.iter().map(|o| o.ectopic).collect();
        assert_eq!(
            flags,
            vec![false, false, false, false, true, false, false, false, false, true]
        );

        for (i, amplitude) in rendered.amplitudes.iter().enumerate() {
            let phase = (i % 200) as f64 / 200.0;
            let expected = if (i / 200) % 5 == 4 {
                wide_complex(phase)
            } else {
                narrow_complex(phase)
            };
            assert_eq!(*amplitude, expected, "sample {}", i);
        }
    }

    #[test]
    fn test_ectopic_beat_lacks_p_wave() {
        let mut rng = create_rng(0);
        let rendered = VentricularExtrasystole::new(60).synthesize(1000, 200.0, &mut rng);
        // Phase 0.075 is the P-wave peak: present in beat 3, absent in beat 4
        assert!(rendered.amplitudes[3 * 200 + 15] > 0.19);
        assert_eq!(rendered.amplitudes[4 * 200 + 15], 0.0);
    }
}
