//! Cardiowave CLI - Command-line interface for ECG rhythm synthesis
//!
//! This binary renders illustrative monitor traces for a fixed set of cardiac
//! rhythms, lists the available rhythms, and validates configuration files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use cardiowave_cli::commands;
use cardiowave_cli::commands::generate::GenerateArgs;
use cardiowave_cli::input::ConfigOverrides;
use cardiowave_cli::logging;
use cardiowave_cli::output::TraceFormat;

/// Cardiowave - ECG rhythm waveform synthesizer
#[derive(Parser)]
#[command(name = "cardiowave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a rhythm trace as CSV or JSON
    Generate {
        /// JSON configuration file; flags override its values
        #[arg(short, long)]
        config: Option<String>,

        /// Pattern identifier (see `cardiowave patterns`)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Heart rate in beats per minute
        #[arg(long)]
        bpm: Option<u32>,

        /// Window length in seconds
        #[arg(short, long)]
        duration: Option<f64>,

        /// Samples per second
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Seed for reproducible output (default: OS entropy)
        #[arg(long)]
        seed: Option<u32>,

        /// Output file, or directory with --all (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "csv", value_parser = ["csv", "json"])]
        format: String,

        /// Render every pattern into the output directory
        #[arg(long)]
        all: bool,

        /// Fail on degenerate configurations and unknown pattern ids
        #[arg(long)]
        strict: bool,
    },

    /// List supported rhythm patterns
    Patterns {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to the JSON configuration file
        #[arg(short, long)]
        config: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            config,
            pattern,
            bpm,
            duration,
            sample_rate,
            seed,
            output,
            format,
            all,
            strict,
        } => format
            .parse::<TraceFormat>()
            .map_err(anyhow::Error::msg)
            .and_then(|format| {
                commands::generate::run(&GenerateArgs {
                    config: config.map(PathBuf::from),
                    overrides: ConfigOverrides {
                        pattern,
                        heart_rate_bpm: bpm,
                        duration_seconds: duration,
                        sample_rate_hz: sample_rate,
                    },
                    format,
                    output: output.map(PathBuf::from),
                    all,
                    seed,
                    strict,
                })
            }),
        Commands::Patterns { json } => commands::patterns::run(json),
        Commands::Validate { config } => commands::validate::run(&PathBuf::from(config)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
