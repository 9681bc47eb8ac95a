//! Error types for policy construction and password generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the core operations.
///
/// Validation and scoring never fail; only configuration and generation do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyEngineError {
    #[error("Requested length {requested} is outside the allowed range {min}..={max}")]
    InvalidLength {
        requested: usize,
        min: usize,
        max: usize,
    },
    #[error("Policy error: {0}")]
    Policy(String),
    #[error("Invalid policy configuration: {0}")]
    Config(String),
}

/// Errors raised while loading a [`PolicyConfig`](crate::PolicyConfig) from the environment.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Pattern file is empty")]
    EmptyFile,
    #[error("Environment variable {name} has invalid value {value:?}")]
    InvalidVar { name: &'static str, value: String },
    #[error(transparent)]
    Policy(#[from] PolicyEngineError),
}
