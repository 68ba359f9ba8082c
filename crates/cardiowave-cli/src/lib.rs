//! Cardiowave CLI library.
//!
//! This crate provides the core functionality for the `cardiowave` binary:
//! configuration loading, trace output formats, and the command
//! implementations.

pub mod commands;
pub mod input;
pub mod logging;
pub mod output;
