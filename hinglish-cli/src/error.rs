//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No files matched the input patterns
    NoInputFiles(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Translation failed
    TranslationError(String),
    /// Some inputs of a multi-file operation failed
    PartialFailure {
        /// Inputs that failed
        failed: usize,
        /// Inputs attempted
        total: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No files found matching the provided patterns: {patterns}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::TranslationError(msg) => write!(f, "Translation error: {msg}"),
            CliError::PartialFailure { failed, total } => {
                write!(f, "{failed} of {total} inputs failed")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
