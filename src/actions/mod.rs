use crate::error_utils::classify_error;
use crate::exit_codes::PagertreeExitCode;
use crate::pagertree::ApiError;
use thiserror::Error;

pub mod alerts;
pub mod broadcasts;
pub mod config;
pub mod integrations;
pub mod teams;
pub mod users;
pub mod utils;

#[derive(Debug, Error)]
pub enum CliActionError {
    /// A client call failed while performing `action`, e.g. "creating alert"
    #[error("{}", classify_error(.source, .action))]
    Api { action: String, source: ApiError },

    #[error("{0}")]
    FormattingError(#[from] crate::format::FormattingError),

    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    #[error("{0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),

    #[error("Prompt error: {0}")]
    PromptError(#[from] inquire::InquireError),
}

impl CliActionError {
    pub fn exit_code(&self) -> PagertreeExitCode {
        match self {
            CliActionError::Api { source, .. } => PagertreeExitCode::for_api_error(source),
            CliActionError::FormattingError(_) => PagertreeExitCode::DataError,
            CliActionError::MissingRequiredArgument(_) => PagertreeExitCode::UsageError,
            CliActionError::ConfigurationError(_) => PagertreeExitCode::ConfigError,
            CliActionError::PromptError(_) => PagertreeExitCode::SoftwareError,
        }
    }
}

/// Attach the action being performed to a client failure
pub trait ActionContext<T> {
    fn action(self, action: &str) -> Result<T, CliActionError>;
}

impl<T> ActionContext<T> for Result<T, ApiError> {
    fn action(self, action: &str) -> Result<T, CliActionError> {
        self.map_err(|source| CliActionError::Api {
            action: action.to_string(),
            source,
        })
    }
}
