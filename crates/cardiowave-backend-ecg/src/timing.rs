//! Beat timing disciplines.
//!
//! A [`BeatTiming`] is stepped once per sample index, in order, and reports
//! where that sample falls: the phase within the current beat, the beat's
//! index, whether a new beat starts at this sample, and whether the beat is
//! ectopic.
//!
//! The intra-beat phase clock always runs on the base interval. Only the
//! irregular discipline moves beat boundaries around, and it does so at
//! boundaries, never mid-beat.

use rand::RngCore;
use tracing::trace;

use crate::rng::uniform_from;

/// Lower bound of the RR jitter factor for irregular timing.
pub const JITTER_MIN: f64 = 0.7;
/// Upper bound of the RR jitter factor for irregular timing.
pub const JITTER_MAX: f64 = 1.3;
/// Every `ECTOPIC_PERIOD`th beat is ectopic.
pub const ECTOPIC_PERIOD: u64 = 5;

/// Where a sample falls relative to the beat structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeatPosition {
    /// Phase within the beat, in `[0, 1)`.
    pub phase: f64,
    /// Zero-based index of the beat this sample belongs to.
    pub beat_index: u64,
    /// Whether a beat starts at this sample.
    pub onset: bool,
    /// Whether the beat is ectopic (drawn with a wide complex).
    pub ectopic: bool,
}

/// Timing discipline for a beat-structured rhythm.
#[derive(Debug, Clone, PartialEq)]
pub enum BeatTiming {
    /// Every beat lasts exactly `interval` samples.
    Fixed {
        /// Samples per beat.
        interval: f64,
    },
    /// Beat boundaries drift by a random jitter of the base interval.
    Irregular {
        /// Base samples per beat; drives the phase clock.
        interval: f64,
        /// Sample position at which the next beat starts.
        next_beat: f64,
        /// Beats started so far.
        beats: u64,
    },
    /// Fixed timing where every fifth beat is ectopic.
    EctopicPeriodic {
        /// Samples per beat.
        interval: f64,
    },
}

impl BeatTiming {
    /// Creates a fixed-interval discipline.
    pub fn fixed(interval: f64) -> Self {
        BeatTiming::Fixed { interval }
    }

    /// Creates an irregular discipline around a base interval.
    pub fn irregular(interval: f64) -> Self {
        BeatTiming::Irregular {
            interval,
            next_beat: 0.0,
            beats: 0,
        }
    }

    /// Creates a periodic-ectopic discipline.
    pub fn ectopic_periodic(interval: f64) -> Self {
        BeatTiming::EctopicPeriodic { interval }
    }

    /// Samples per beat at the base rate.
    pub fn interval(&self) -> f64 {
        match self {
            BeatTiming::Fixed { interval }
            | BeatTiming::Irregular { interval, .. }
            | BeatTiming::EctopicPeriodic { interval } => *interval,
        }
    }

    /// Advances to sample `index` and reports its position.
    ///
    /// Indices must be visited in increasing order for the irregular
    /// discipline; the other two are stateless.
    pub fn step(&mut self, index: usize, rng: &mut dyn RngCore) -> BeatPosition {
        let phase = phase_at(index, self.interval());

        match self {
            BeatTiming::Fixed { interval } => BeatPosition {
                phase,
                beat_index: beat_index_at(index, *interval),
                onset: is_fixed_onset(index, *interval),
                ectopic: false,
            },
            BeatTiming::Irregular {
                interval,
                next_beat,
                beats,
            } => {
                let i = index as f64;
                let onset = i >= *next_beat;
                if onset {
                    let jitter = uniform_from(rng, JITTER_MIN, JITTER_MAX - JITTER_MIN);
                    *next_beat = i + *interval * jitter;
                    *beats += 1;
                    trace!(index, jitter, next_beat = *next_beat, "irregular beat");
                }
                BeatPosition {
                    phase,
                    beat_index: beats.saturating_sub(1),
                    onset,
                    ectopic: false,
                }
            }
            BeatTiming::EctopicPeriodic { interval } => {
                let beat_index = beat_index_at(index, *interval);
                BeatPosition {
                    phase,
                    beat_index,
                    onset: is_fixed_onset(index, *interval),
                    ectopic: beat_index % ECTOPIC_PERIOD == ECTOPIC_PERIOD - 1,
                }
            }
        }
    }
}

/// Phase of sample `index` for a beat `interval` samples long.
pub fn phase_at(index: usize, interval: f64) -> f64 {
    (index as f64 % interval) / interval
}

/// Index of the fixed-interval beat containing sample `index`.
pub fn beat_index_at(index: usize, interval: f64) -> u64 {
    (index as f64 / interval).floor() as u64
}

fn is_fixed_onset(index: usize, interval: f64) -> bool {
    index == 0 || beat_index_at(index, interval) != beat_index_at(index - 1, interval)
}
