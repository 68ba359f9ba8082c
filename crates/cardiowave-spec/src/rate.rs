//! Heart-rate clamp policies.
//!
//! Some rhythms only make sense in a particular rate band: a tachycardia is
//! never slower than 120 bpm and a bradycardia never faster than 50 bpm. The
//! band for each pattern lives in [`RATE_POLICIES`] rather than inside the
//! synthesis strategies, so it can be inspected and tested on its own.

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Lowest rate any strategy runs at; keeps the beat interval finite.
pub const MIN_EFFECTIVE_BPM: u32 = 1;

/// Clamp applied to the requested heart rate before synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "bpm", rename_all = "snake_case")]
pub enum RateClamp {
    /// The requested rate is used as-is.
    Unclamped,
    /// The rate is raised to at least this value.
    AtLeast(u32),
    /// The rate is lowered to at most this value.
    AtMost(u32),
}

/// Per-pattern clamp table. Patterns not listed are [`RateClamp::Unclamped`].
pub const RATE_POLICIES: &[(Pattern, RateClamp)] = &[
    (Pattern::Tachycardia, RateClamp::AtLeast(120)),
    (Pattern::Bradycardia, RateClamp::AtMost(50)),
];

impl RateClamp {
    /// Looks up the clamp for a pattern.
    pub fn for_pattern(pattern: Pattern) -> Self {
        RATE_POLICIES
            .iter()
            .find(|(p, _)| *p == pattern)
            .map(|(_, clamp)| *clamp)
            .unwrap_or(RateClamp::Unclamped)
    }

    /// Applies the clamp to a requested rate.
    ///
    /// A requested rate of zero is first raised to [`MIN_EFFECTIVE_BPM`].
    pub fn apply(&self, bpm: u32) -> u32 {
        let bpm = bpm.max(MIN_EFFECTIVE_BPM);
        match *self {
            RateClamp::Unclamped => bpm,
            RateClamp::AtLeast(floor) => bpm.max(floor),
            RateClamp::AtMost(ceiling) => bpm.min(ceiling),
        }
    }
}

impl std::fmt::Display for RateClamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateClamp::Unclamped => write!(f, "any"),
            RateClamp::AtLeast(bpm) => write!(f, ">= {} bpm", bpm),
            RateClamp::AtMost(bpm) => write!(f, "<= {} bpm", bpm),
        }
    }
}
