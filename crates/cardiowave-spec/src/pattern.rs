//! Rhythm pattern types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::rate::RateClamp;

/// Cardiac rhythm classifications the generator can synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Pattern {
    /// Normal sinus rhythm.
    #[default]
    #[serde(rename = "normal")]
    NormalSinus,
    /// Sinus tachycardia (at least 120 bpm).
    #[serde(rename = "tachycardia")]
    Tachycardia,
    /// Sinus bradycardia (at most 50 bpm).
    #[serde(rename = "bradycardia")]
    Bradycardia,
    /// Atrial fibrillation: irregular RR intervals over a fibrillating baseline.
    #[serde(rename = "afib")]
    AtrialFibrillation,
    /// Ventricular extrasystoles: every fifth beat is a wide ectopic complex.
    #[serde(rename = "ves")]
    VentricularExtrasystole,
    /// ST-segment elevation.
    #[serde(rename = "st_elevation")]
    StElevation,
    /// ST-segment depression.
    #[serde(rename = "st_depression")]
    StDepression,
    /// Ventricular fibrillation: chaotic activity with no beat structure.
    #[serde(rename = "vfib")]
    VentricularFibrillation,
    /// Asystole: flat line with minimal noise.
    #[serde(rename = "asystole")]
    Asystole,
}

impl Pattern {
    /// Returns the stable identifier used for serialization and CLI parsing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::NormalSinus => "normal",
            Pattern::Tachycardia => "tachycardia",
            Pattern::Bradycardia => "bradycardia",
            Pattern::AtrialFibrillation => "afib",
            Pattern::VentricularExtrasystole => "ves",
            Pattern::StElevation => "st_elevation",
            Pattern::StDepression => "st_depression",
            Pattern::VentricularFibrillation => "vfib",
            Pattern::Asystole => "asystole",
        }
    }

    /// Returns the human-readable label shown on a monitor.
    pub fn display_name(&self) -> &'static str {
        match self {
            Pattern::NormalSinus => "Normal Sinus Rhythm",
            Pattern::Tachycardia => "Tachycardia",
            Pattern::Bradycardia => "Bradycardia",
            Pattern::AtrialFibrillation => "Atrial Fibrillation",
            Pattern::VentricularExtrasystole => "Ventricular Extrasystoles (VES)",
            Pattern::StElevation => "ST-Elevation (STEMI)",
            Pattern::StDepression => "ST-Depression (Ischemia)",
            Pattern::VentricularFibrillation => "Ventricular Fibrillation",
            Pattern::Asystole => "Asystole",
        }
    }

    /// Returns the heart-rate clamp this pattern applies.
    pub fn rate_clamp(&self) -> RateClamp {
        RateClamp::for_pattern(*self)
    }

    /// Whether the pattern is built from discrete P-QRS-T beats.
    pub fn has_beat_structure(&self) -> bool {
        !matches!(self, Pattern::VentricularFibrillation | Pattern::Asystole)
    }

    /// Whether the pattern consumes the injected randomness source.
    pub fn is_stochastic(&self) -> bool {
        matches!(
            self,
            Pattern::AtrialFibrillation | Pattern::VentricularFibrillation | Pattern::Asystole
        )
    }

    /// Parses an identifier, falling back to [`Pattern::NormalSinus`] for
    /// anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Returns all patterns.
    pub fn all() -> &'static [Pattern] {
        &[
            Pattern::NormalSinus,
            Pattern::Tachycardia,
            Pattern::Bradycardia,
            Pattern::AtrialFibrillation,
            Pattern::VentricularExtrasystole,
            Pattern::StElevation,
            Pattern::StDepression,
            Pattern::VentricularFibrillation,
            Pattern::Asystole,
        ]
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown pattern: {}", s))
    }
}

/// Deserializes a pattern identifier, mapping unknown identifiers to
/// [`Pattern::NormalSinus`].
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Pattern, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    Ok(Pattern::parse_lenient(&id))
}
