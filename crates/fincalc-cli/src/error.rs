//! CLI error types.

use std::path::PathBuf;

use fincalc_core::FinCalcError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A value could not be read from the console.
    #[error(transparent)]
    Input(#[from] FinCalcError),

    /// Configuration file could not be used.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// File that was being read.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
