//! Main entry point for waveform generation.
//!
//! Dispatch goes through [`STRATEGIES`], a table from each [`Pattern`] to the
//! constructor of its rhythm strategy. The heart rate handed to a constructor
//! has already been through the pattern's [`RateClamp`](cardiowave_spec::RateClamp),
//! so tachycardia and bradycardia reuse the plain sinus strategy.

use cardiowave_spec::{GeneratorConfig, Pattern, Sample};
use rand::RngCore;
use tracing::{debug, warn};

use crate::error::{EcgError, EcgResult};
use crate::synthesis::ectopic::VentricularExtrasystole;
use crate::synthesis::fibrillation::{AtrialFibrillation, VentricularFibrillation};
use crate::synthesis::flatline::Asystole;
use crate::synthesis::sinus::SinusRhythm;
use crate::synthesis::{Rendered, RhythmSynth};
use crate::waveform::Waveform;

/// Largest window either entry point renders.
pub const MAX_WINDOW_SAMPLES: usize = 10_000_000;

/// Builds a strategy for an (already clamped) heart rate.
pub type StrategyCtor = fn(u32) -> Box<dyn RhythmSynth>;

/// Strategy table, one entry per pattern.
pub const STRATEGIES: &[(Pattern, StrategyCtor)] = &[
    (Pattern::NormalSinus, sinus),
    (Pattern::Tachycardia, sinus),
    (Pattern::Bradycardia, sinus),
    (Pattern::AtrialFibrillation, atrial_fibrillation),
    (Pattern::VentricularExtrasystole, extrasystole),
    (Pattern::StElevation, st_elevation),
    (Pattern::StDepression, st_depression),
    (Pattern::VentricularFibrillation, ventricular_fibrillation),
    (Pattern::Asystole, asystole),
];

fn sinus(bpm: u32) -> Box<dyn RhythmSynth> {
    Box::new(SinusRhythm::new(bpm))
}

fn atrial_fibrillation(bpm: u32) -> Box<dyn RhythmSynth> {
    Box::new(AtrialFibrillation::new(bpm))
}

fn extrasystole(bpm: u32) -> Box<dyn RhythmSynth> {
    Box::new(VentricularExtrasystole::new(bpm))
}

fn st_elevation(bpm: u32) -> Box<dyn RhythmSynth> {
    Box::new(SinusRhythm::st_elevation(bpm))
}

fn st_depression(bpm: u32) -> Box<dyn RhythmSynth> {
    Box::new(SinusRhythm::st_depression(bpm))
}

fn ventricular_fibrillation(_bpm: u32) -> Box<dyn RhythmSynth> {
    Box::new(VentricularFibrillation)
}

fn asystole(_bpm: u32) -> Box<dyn RhythmSynth> {
    Box::new(Asystole)
}

/// Looks up the strategy constructor for a pattern.
///
/// A pattern missing from the table falls back to normal sinus rhythm.
pub fn strategy_for(pattern: Pattern) -> StrategyCtor {
    STRATEGIES
        .iter()
        .find(|(p, _)| *p == pattern)
        .map(|(_, ctor)| *ctor)
        .unwrap_or(sinus)
}

/// Generates a waveform for a configuration.
///
/// Never fails: a non-positive duration, a zero sample rate or a window
/// larger than [`MAX_WINDOW_SAMPLES`] yields an empty waveform, and the heart
/// rate is clamped per pattern.
///
/// # Arguments
/// * `config` - Pattern, heart rate, duration and sample rate
/// * `rng` - Randomness source for the stochastic rhythms
///
/// # Example
/// ```
/// use cardiowave_backend_ecg::{generate, rng::create_rng};
/// use cardiowave_spec::{GeneratorConfig, Pattern};
///
/// let config = GeneratorConfig::new(Pattern::NormalSinus, 60)
///     .duration_seconds(1.0)
///     .sample_rate_hz(200);
/// let wave = generate(&config, &mut create_rng(42));
///
/// assert_eq!(wave.len(), 200);
/// assert_eq!(wave.beats.len(), 1);
/// assert_eq!(wave.samples[0].amplitude, 0.0);
/// ```
pub fn generate(config: &GeneratorConfig, rng: &mut dyn RngCore) -> Waveform {
    let num_samples = config.sample_count();
    let effective_bpm = config.effective_heart_rate();

    debug!(
        pattern = %config.pattern,
        requested_bpm = config.heart_rate_bpm,
        effective_bpm,
        num_samples,
        sample_rate_hz = config.sample_rate_hz,
        "synthesizing rhythm"
    );

    if num_samples > MAX_WINDOW_SAMPLES {
        warn!(
            pattern = %config.pattern,
            num_samples,
            max = MAX_WINDOW_SAMPLES,
            "window too large, rendering nothing"
        );
        return Waveform::from_rendered(
            config.pattern,
            effective_bpm,
            config.sample_rate_hz,
            Rendered::default(),
        );
    }

    let strategy = strategy_for(config.pattern)(effective_bpm);
    let rendered = strategy.synthesize(num_samples, config.sample_rate_hz as f64, rng);

    Waveform::from_rendered(
        config.pattern,
        effective_bpm,
        config.sample_rate_hz,
        rendered,
    )
}

/// Generates a waveform, rejecting degenerate configurations.
///
/// Unlike [`generate`], this refuses non-positive or non-finite durations,
/// zero sample rates, zero heart rates on beat-structured rhythms, and
/// windows larger than [`MAX_WINDOW_SAMPLES`].
pub fn generate_strict(config: &GeneratorConfig, rng: &mut dyn RngCore) -> EcgResult<Waveform> {
    if let Err(e) = check_config(config) {
        warn!(pattern = %config.pattern, code = e.code(), "rejected configuration: {}", e);
        return Err(e);
    }
    Ok(generate(config, rng))
}

fn check_config(config: &GeneratorConfig) -> EcgResult<()> {
    if config.sample_rate_hz == 0 {
        return Err(EcgError::InvalidSampleRate {
            rate: config.sample_rate_hz,
        });
    }
    if !config.duration_seconds.is_finite() || config.duration_seconds <= 0.0 {
        return Err(EcgError::InvalidDuration {
            duration: config.duration_seconds,
        });
    }
    if config.pattern.has_beat_structure() && config.heart_rate_bpm == 0 {
        return Err(EcgError::InvalidHeartRate {
            bpm: config.heart_rate_bpm,
        });
    }

    let num_samples = config.sample_count();
    if num_samples == 0 || num_samples > MAX_WINDOW_SAMPLES {
        return Err(EcgError::invalid_param(
            "duration_seconds",
            format!(
                "produces {} samples (must be between 1 and {})",
                num_samples, MAX_WINDOW_SAMPLES
            ),
        ));
    }

    Ok(())
}

/// Generates samples from loose parameters.
///
/// Equivalent to building a [`GeneratorConfig`] and calling [`generate`].
pub fn generate_samples(
    pattern: Pattern,
    heart_rate_bpm: u32,
    duration_seconds: f64,
    sample_rate_hz: u32,
    rng: &mut dyn RngCore,
) -> Vec<Sample> {
    let config = GeneratorConfig::new(pattern, heart_rate_bpm)
        .duration_seconds(duration_seconds)
        .sample_rate_hz(sample_rate_hz);
    generate(&config, rng).samples
}

/// Human-readable label for a pattern.
pub fn pattern_display_name(pattern: Pattern) -> &'static str {
    pattern.display_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_covers_every_pattern() {
        for pattern in Pattern::all() {
            assert_eq!(
                STRATEGIES.iter().filter(|(p, _)| p == pattern).count(),
                1,
                "{}",
                pattern
            );
        }
    }

    #[test]
    fn test_tachycardia_matches_clamped_normal() {
        let mut rng = create_rng(1);
        let tachy = generate(&GeneratorConfig::new(Pattern::Tachycardia, 80), &mut rng);
        let normal = generate(&GeneratorConfig::new(Pattern::NormalSinus, 120), &mut rng);
        assert_eq!(tachy.heart_rate_bpm, 120);
        assert_eq!(tachy.samples, normal.samples);
        assert_eq!(tachy.beats, normal.beats);
    }

    #[test]
    fn test_bradycardia_matches_clamped_normal() {
        let mut rng = create_rng(1);
        let brady = generate(&GeneratorConfig::new(Pattern::Bradycardia, 80), &mut rng);
        let normal = generate(&GeneratorConfig::new(Pattern::NormalSinus, 50), &mut rng);
        assert_eq!(brady.heart_rate_bpm, 50);
        assert_eq!(brady.samples, normal.samples);
    }

    #[test]
    fn test_degenerate_windows_are_empty() {
        let mut rng = create_rng(1);
        let base = GeneratorConfig::new(Pattern::AtrialFibrillation, 70);
        assert!(generate(&base.clone().duration_seconds(0.0), &mut rng).is_empty());
        assert!(generate(&base.clone().duration_seconds(-5.0), &mut rng).is_empty());
        assert!(generate(&base.sample_rate_hz(0), &mut rng).is_empty());
    }

    #[test]
    fn test_oversized_window_is_empty() {
        let mut rng = create_rng(1);
        let huge = GeneratorConfig::new(Pattern::NormalSinus, 60).duration_seconds(1e300);
        assert_eq!(huge.sample_count(), usize::MAX);
        let wave = generate(&huge, &mut rng);
        assert!(wave.is_empty());
        assert!(wave.beats.is_empty());

        let just_over = GeneratorConfig::new(Pattern::Asystole, 60)
            .duration_seconds((MAX_WINDOW_SAMPLES + 1) as f64)
            .sample_rate_hz(1);
        assert_eq!(just_over.sample_count(), MAX_WINDOW_SAMPLES + 1);
        assert!(generate(&just_over, &mut rng).is_empty());
        assert!(generate_samples(Pattern::VentricularFibrillation, 60, 1e300, 200, &mut rng)
            .is_empty());
    }

    #[test]
    fn test_zero_heart_rate_does_not_panic() {
        let mut rng = create_rng(1);
        let wave = generate(&GeneratorConfig::new(Pattern::NormalSinus, 0), &mut rng);
        assert_eq!(wave.heart_rate_bpm, 1);
        assert_eq!(wave.len(), 2000);
        assert!(wave.samples.iter().all(|s| s.amplitude.is_finite()));
    }

    #[test]
    fn test_strict_rejects_degenerate() {
        let mut rng = create_rng(1);
        let base = GeneratorConfig::default();

        let err = generate_strict(&base.clone().sample_rate_hz(0), &mut rng).unwrap_err();
        assert_eq!(err.code(), "ECG_001");

        let err = generate_strict(&base.clone().duration_seconds(0.0), &mut rng).unwrap_err();
        assert_eq!(err.code(), "ECG_002");

        let err = generate_strict(&base.clone().heart_rate_bpm(0), &mut rng).unwrap_err();
        assert_eq!(err.code(), "ECG_003");

        let err = generate_strict(&base.clone().duration_seconds(1e-4), &mut rng).unwrap_err();
        assert_eq!(err.code(), "ECG_004");

        let err = generate_strict(&base.duration_seconds(1e6), &mut rng).unwrap_err();
        assert_eq!(err.code(), "ECG_004");
    }

    #[test]
    fn test_strict_accepts_valid() {
        let mut rng = create_rng(1);
        let wave = generate_strict(&GeneratorConfig::default(), &mut rng).unwrap();
        assert_eq!(wave.len(), 2000);

        let flat = GeneratorConfig::new(Pattern::Asystole, 0);
        assert!(generate_strict(&flat, &mut rng).is_ok());
    }

    #[test]
    fn test_generate_samples_matches_config() {
        let samples = generate_samples(Pattern::StElevation, 70, 2.0, 250, &mut create_rng(4));
        let config = GeneratorConfig::new(Pattern::StElevation, 70)
            .duration_seconds(2.0)
            .sample_rate_hz(250);
        assert_eq!(samples, generate(&config, &mut create_rng(4)).samples);
    }

    #[test]
    fn test_display_name_lookup() {
        assert_eq!(
            pattern_display_name(Pattern::StElevation),
            "ST-Elevation (STEMI)"
        );
    }
}
