//! Configuration loading and command-line overrides.
//!
//! A generator configuration can come from a JSON file, from flags, or from
//! both: flags win over file values, and anything still unset keeps the
//! configuration defaults.

use cardiowave_spec::{ConfigError, GeneratorConfig, Pattern};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while assembling a configuration.
#[derive(Debug, Error)]
pub enum InputError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for a generator config.
    #[error("invalid config {path}: {source}")]
    InvalidConfig {
        /// File that failed.
        path: PathBuf,
        /// Parse error.
        source: ConfigError,
    },

    /// A pattern identifier was not recognized.
    #[error("unknown pattern '{id}' (expected one of: {expected})")]
    UnknownPattern {
        /// The identifier given.
        id: String,
        /// Comma-separated list of valid identifiers.
        expected: String,
    },
}

/// Loads a generator configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    GeneratorConfig::from_json(&content).map_err(|source| InputError::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Values given on the command line, each overriding the loaded config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Pattern identifier.
    pub pattern: Option<String>,
    /// Heart rate in bpm.
    pub heart_rate_bpm: Option<u32>,
    /// Window length in seconds.
    pub duration_seconds: Option<f64>,
    /// Sample rate in Hz.
    pub sample_rate_hz: Option<u32>,
}

/// Outcome of resolving a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// The final configuration.
    pub config: GeneratorConfig,
    /// Non-fatal notes (e.g. an unknown pattern that fell back to normal).
    pub warnings: Vec<String>,
}

impl ConfigOverrides {
    /// Applies the overrides on top of `base`.
    ///
    /// Unknown pattern identifiers fall back to normal sinus rhythm with a
    /// warning, unless `strict` is set, in which case they are an error.
    pub fn apply(&self, base: GeneratorConfig, strict: bool) -> Result<Resolved, InputError> {
        let mut config = base;
        let mut warnings = Vec::new();

        if let Some(ref id) = self.pattern {
            config.pattern = match id.parse::<Pattern>() {
                Ok(pattern) => pattern,
                Err(_) if !strict => {
                    warnings.push(format!(
                        "unknown pattern '{}', using '{}'",
                        id,
                        Pattern::NormalSinus
                    ));
                    Pattern::NormalSinus
                }
                Err(_) => {
                    return Err(InputError::UnknownPattern {
                        id: id.clone(),
                        expected: pattern_ids(),
                    })
                }
            };
        }
        if let Some(bpm) = self.heart_rate_bpm {
            config.heart_rate_bpm = bpm;
        }
        if let Some(seconds) = self.duration_seconds {
            config.duration_seconds = seconds;
        }
        if let Some(hz) = self.sample_rate_hz {
            config.sample_rate_hz = hz;
        }

        Ok(Resolved { config, warnings })
    }
}

/// Loads the optional config file and applies overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    strict: bool,
) -> Result<Resolved, InputError> {
    let base = match config_path {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    overrides.apply(base, strict)
}

fn pattern_ids() -> String {
    Pattern::all()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
