//! Validate command implementation
//!
//! Checks a configuration file and reports errors and warnings.

use anyhow::{Context, Result};
use cardiowave_spec::validation::validate_config;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use crate::input::load_config;

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the JSON configuration file
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config_path: &Path) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), config_path.display());

    let config = load_config(config_path)
        .with_context(|| format!("Failed to load config file: {}", config_path.display()))?;

    println!(
        "{} {} ({}), {} bpm -> {} bpm, {} s @ {} Hz",
        "Config:".dimmed(),
        config.pattern.as_str(),
        config.pattern.display_name(),
        config.heart_rate_bpm,
        config.effective_heart_rate(),
        config.duration_seconds,
        config.sample_rate_hz
    );

    if config.pattern.has_beat_structure()
        && config.heart_rate_bpm > 0
        && config.sample_rate_hz > 0
    {
        println!(
            "{} {:.1} samples per beat",
            "Timing:".dimmed(),
            config.beat_interval_samples()
        );
    }

    let result = validate_config(&config);

    for error in &result.errors {
        println!("  {} {}", "x".red().bold(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }

    match result.into_result() {
        Ok(warnings) => {
            println!(
                "{} {} sample(s), {} warning(s)",
                "Valid:".green().bold(),
                config.sample_count(),
                warnings.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {}", "Invalid:".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}
