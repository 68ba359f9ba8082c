//! Rhythm synthesis strategies.
//!
//! Each module implements one family of rhythms:
//! - `sinus` - Regular P-QRS-T beats with an optional ST-segment offset
//!   (normal sinus, tachycardia, bradycardia, ST elevation/depression)
//! - `ectopic` - Regular beats with periodic wide ventricular extrasystoles
//! - `fibrillation` - Atrial fibrillation (irregular RR, fibrillating
//!   baseline) and ventricular fibrillation (chaotic, no beats)
//! - `flatline` - Asystole

pub mod ectopic;
pub mod fibrillation;
pub mod flatline;
pub mod sinus;

use rand::RngCore;

use crate::cycle::ComplexShape;
use crate::timing::{BeatPosition, BeatTiming};

/// A beat onset found while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Onset {
    /// Sample index at which the beat starts.
    pub index: usize,
    /// Whether the beat was drawn as an ectopic complex.
    pub ectopic: bool,
}

/// Raw output of a strategy: one amplitude per sample plus beat onsets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    /// Amplitude per sample index.
    pub amplitudes: Vec<f64>,
    /// Beat onsets in sample order; empty for rhythms without beats.
    pub onsets: Vec<Onset>,
}

/// Common trait for all rhythm strategies.
pub trait RhythmSynth {
    /// Renders a window of samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Sample rate in Hz
    /// * `rng` - Randomness source for jitter and noise
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut dyn RngCore) -> Rendered;
}

/// Samples per beat for a heart rate.
pub fn beat_interval(sample_rate: f64, bpm: u32) -> f64 {
    sample_rate * 60.0 / bpm as f64
}

/// Walks a beat timing across the window and collects amplitudes and onsets.
///
/// `amplitude` receives each sample's position and the RNG, after the timing
/// has consumed whatever randomness it needs for that sample.
pub(crate) fn render_beats<F>(
    num_samples: usize,
    mut timing: BeatTiming,
    rng: &mut dyn RngCore,
    mut amplitude: F,
) -> Rendered
where
    F: FnMut(&BeatPosition, &mut dyn RngCore) -> f64,
{
    let mut rendered = Rendered {
        amplitudes: Vec::with_capacity(num_samples),
        onsets: Vec::new(),
    };

    for i in 0..num_samples {
        let pos = timing.step(i, &mut *rng);
        if pos.onset {
            rendered.onsets.push(Onset {
                index: i,
                ectopic: pos.ectopic,
            });
        }
        rendered.amplitudes.push(amplitude(&pos, &mut *rng));
    }

    rendered
}

/// Shape to draw for a beat.
pub(crate) fn shape_for(pos: &BeatPosition) -> ComplexShape {
    if pos.ectopic {
        ComplexShape::Wide
    } else {
        ComplexShape::Narrow
    }
}
