//! CLI command implementations

pub mod generate;
pub mod patterns;
pub mod validate;
