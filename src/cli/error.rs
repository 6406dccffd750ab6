//! CLI-level errors

use thiserror::Error;

/// Top-level error type: what gets rendered to the user through the
/// fatal sink before the process exits with the failure sentinel.
#[derive(Error, Debug)]
pub enum CliError {
    /// Argument or subcommand resolution failed (message rendered by clap)
    #[error("{0}")]
    Usage(String),

    /// A subcommand runner reported failure
    #[error("{0}")]
    Command(String),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
