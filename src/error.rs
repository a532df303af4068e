use thiserror::Error;

use crate::{actions::CliActionError, exit_codes::PagertreeExitCode, pagertree};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] crate::format::FormattingError),
    /// The API client could not be set up
    #[error("Error initializing client: {0}")]
    ClientError(#[from] pagertree::ApiError),
    #[error("{0}")]
    ActionError(#[from] CliActionError),
}

impl CliError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> PagertreeExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => PagertreeExitCode::UsageError,
            CliError::ConfigurationError(_) => PagertreeExitCode::ConfigError,
            CliError::FormattingError(_) => PagertreeExitCode::UsageError,
            CliError::ClientError(e) => PagertreeExitCode::for_api_error(e),
            CliError::ActionError(e) => e.exit_code(),
        }
    }
}
