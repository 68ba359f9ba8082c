//! Cardiowave Spec Library
//!
//! This crate provides the data model shared by the cardiowave crates: the
//! closed set of rhythm [`Pattern`]s, the per-pattern heart-rate clamp table,
//! the [`GeneratorConfig`] handed to the synthesis backend, and the [`Sample`]
//! points it produces.
//!
//! # Example
//!
//! ```
//! use cardiowave_spec::{GeneratorConfig, Pattern};
//! use cardiowave_spec::validation::validate_config;
//!
//! let config = GeneratorConfig::new(Pattern::Tachycardia, 90)
//!     .duration_seconds(10.0)
//!     .sample_rate_hz(200);
//!
//! assert_eq!(config.sample_count(), 2000);
//! assert_eq!(config.effective_heart_rate(), 120);
//!
//! let result = validate_config(&config);
//! assert!(result.is_ok());
//! assert_eq!(result.warnings.len(), 1); // rate raised by the tachycardia clamp
//! ```
//!
//! # Modules
//!
//! - [`config`]: Generator configuration and JSON loading
//! - [`error`]: Error and warning types for validation
//! - [`pattern`]: Rhythm patterns, identifiers, and display names
//! - [`rate`]: Declarative heart-rate clamp policies
//! - [`sample`]: Time/amplitude sample points
//! - [`validation`]: Configuration validation

pub mod config;
pub mod error;
pub mod pattern;
pub mod rate;
pub mod sample;
pub mod validation;

pub use config::GeneratorConfig;
pub use error::{
    ConfigError, ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use pattern::Pattern;
pub use rate::RateClamp;
pub use sample::Sample;
