//! Patterns command implementation
//!
//! Lists the supported rhythms with their display names and rate policies.

use anyhow::Result;
use cardiowave_spec::{Pattern, RateClamp};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

/// One row of the pattern listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternInfo {
    /// Pattern identifier.
    pub id: Pattern,
    /// Human-readable label.
    pub name: &'static str,
    /// Heart-rate clamp applied before synthesis.
    pub rate_policy: RateClamp,
    /// Whether the rhythm has discrete beats.
    pub beats: bool,
    /// Whether the rhythm consumes randomness.
    pub stochastic: bool,
}

impl PatternInfo {
    fn of(pattern: Pattern) -> Self {
        Self {
            id: pattern,
            name: pattern.display_name(),
            rate_policy: pattern.rate_clamp(),
            beats: pattern.has_beat_structure(),
            stochastic: pattern.is_stochastic(),
        }
    }
}

/// Returns the listing for every pattern.
pub fn pattern_table() -> Vec<PatternInfo> {
    Pattern::all().iter().map(|p| PatternInfo::of(*p)).collect()
}

/// Run the patterns command
pub fn run(json: bool) -> Result<ExitCode> {
    let table = pattern_table();

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(ExitCode::SUCCESS);
    }

    for info in &table {
        let mut flags = Vec::new();
        if !info.beats {
            flags.push("no beats");
        }
        if info.stochastic {
            flags.push("random");
        }
        println!(
            "{:<14} {:<36} {:<12} {}",
            info.id.as_str().cyan().bold(),
            info.name,
            info.rate_policy.to_string(),
            flags.join(", ").dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}
