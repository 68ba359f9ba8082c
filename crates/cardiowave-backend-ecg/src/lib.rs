//! Cardiowave ECG Backend
//!
//! This crate synthesizes illustrative single-lead ECG traces for a scrolling
//! patient monitor. Given a rhythm [`Pattern`](cardiowave_spec::Pattern) and a
//! heart rate it materializes a whole window of time/amplitude samples.
//!
//! # Overview
//!
//! Generation is layered:
//!
//! - **Cycle model** - maps a phase within one beat to amplitude, for a narrow
//!   (conducted) or wide (ectopic) QRS complex
//! - **Beat timing** - fixed, irregular (jittered RR) or periodic-ectopic
//! - **Rhythm strategies** - one per pattern, combining the above with ST
//!   offsets, baseline noise or chaotic activity
//! - **Facade** - clamps the heart rate per pattern and dispatches
//!
//! # Determinism
//!
//! Atrial fibrillation, ventricular fibrillation and asystole consume
//! randomness. It always comes from the `&mut dyn RngCore` the caller passes
//! in, so a seeded PCG32 from [`rng::create_rng`] reproduces a trace exactly.
//! Every other pattern is a pure function of its configuration.
//!
//! # Example
//!
//! ```
//! use cardiowave_backend_ecg::{generate, rng::create_rng};
//! use cardiowave_spec::{GeneratorConfig, Pattern};
//!
//! let config = GeneratorConfig::new(Pattern::AtrialFibrillation, 110);
//! let wave = generate(&config, &mut create_rng(7));
//!
//! assert_eq!(wave.len(), 2000);
//! println!("{} beats, hash {}", wave.beats.len(), wave.pcm_hash());
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point (never fails)
//! - [`generate_strict()`] - Variant that rejects degenerate configurations
//! - [`cycle`] - Single-beat P-QRS-T model
//! - [`timing`] - Beat timing disciplines
//! - [`synthesis`] - Rhythm strategies
//! - [`rng`] - Seeded and entropy-backed randomness
//! - [`waveform`] - Generated window with beat annotations

pub mod cycle;
pub mod error;
pub mod generate;
pub mod rng;
pub mod synthesis;
pub mod timing;
pub mod waveform;

pub use error::{EcgError, EcgResult};
pub use generate::{generate, generate_samples, generate_strict, pattern_display_name};
pub use waveform::{BeatMarker, Waveform};
