//! CLI error types

use blastoff_batch::{coefficients, report};
use blastoff_solvers::ConfigError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid solver settings
    #[error("invalid run settings: {0}")]
    Run(#[from] ConfigError),

    /// Invalid coefficient sequence
    #[error("invalid coefficients: {0}")]
    Coefficients(#[from] coefficients::Error),

    /// Invalid report format
    #[error("invalid report format: {0}")]
    Format(#[from] report::FormatError),

    /// Config file could not be parsed
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// File not found
    #[error("file not found: {0}")]
    FileNotFound(String),
}
