//! Generate command implementation
//!
//! Renders one pattern, or every pattern with `--all`, to CSV or JSON.

use anyhow::{Context, Result};
use cardiowave_backend_ecg::rng::{create_rng, derive_seed, from_entropy};
use cardiowave_backend_ecg::{generate, generate_strict, Waveform};
use cardiowave_spec::validation::validate_config;
use cardiowave_spec::{GeneratorConfig, Pattern};
use colored::Colorize;
use rand::RngCore;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

use crate::input::{resolve_config, ConfigOverrides};
use crate::output::{write_trace, TraceFormat};

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Optional JSON configuration file.
    pub config: Option<PathBuf>,
    /// Flag values that override the file.
    pub overrides: ConfigOverrides,
    /// Output format.
    pub format: TraceFormat,
    /// Output file (single pattern) or directory (`all`). Stdout if unset.
    pub output: Option<PathBuf>,
    /// Render every pattern instead of one.
    pub all: bool,
    /// Base seed; entropy if unset.
    pub seed: Option<u32>,
    /// Reject degenerate configurations and unknown pattern ids.
    pub strict: bool,
}

/// Run the generate command
///
/// With `strict` set, a rejected configuration is returned as an error.
///
/// # Returns
/// Exit code: 0 on success
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let resolved = resolve_config(args.config.as_deref(), &args.overrides, args.strict)?;
    for warning in &resolved.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    let base_seed = args.seed.unwrap_or_else(|| from_entropy().next_u32());
    debug!(base_seed, all = args.all, "seed selected");

    if args.all {
        let out_dir = args
            .output
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("--all requires --output <DIR>"))?;
        run_all(&resolved.config, out_dir, args.format, base_seed, args.strict)
    } else {
        let mut rng = create_rng(base_seed);
        let wave = render(&resolved.config, &mut rng, args.strict)?;
        emit(&wave, args.format, args.output.as_deref())?;
        print_summary(&wave);
        Ok(ExitCode::SUCCESS)
    }
}

fn run_all(
    base: &GeneratorConfig,
    out_dir: &Path,
    format: TraceFormat,
    base_seed: u32,
    strict: bool,
) -> Result<ExitCode> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    for pattern in Pattern::all() {
        let config = base.clone().pattern(*pattern);
        let mut rng = create_rng(derive_seed(base_seed, pattern.as_str()));

        let wave = render(&config, &mut rng, strict)?;

        let path = out_dir.join(format!("{}.{}", pattern.as_str(), format.extension()));
        emit(&wave, format, Some(&path))?;
        print_summary(&wave);
    }

    Ok(ExitCode::SUCCESS)
}

fn render(config: &GeneratorConfig, rng: &mut dyn RngCore, strict: bool) -> Result<Waveform> {
    let validation = validate_config(config);
    for warning in &validation.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    if strict {
        generate_strict(config, rng)
            .with_context(|| format!("Failed to generate pattern: {}", config.pattern))
    } else {
        Ok(generate(config, rng))
    }
}

fn emit(wave: &Waveform, format: TraceFormat, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_trace(wave, format, BufWriter::new(file))?;
            info!(path = %path.display(), "wrote trace");
        }
        None => write_trace(wave, format, std::io::stdout().lock())?,
    }
    Ok(())
}

fn print_summary(wave: &Waveform) {
    let hash = wave.pcm_hash();
    eprintln!(
        "{} {} ({}) {} samples, {} beats @ {} bpm, hash {}",
        "Generated".green().bold(),
        wave.pattern.as_str(),
        wave.pattern.display_name(),
        wave.len(),
        wave.beats.len(),
        wave.heart_rate_bpm,
        hash[..16].dimmed()
    );
}
