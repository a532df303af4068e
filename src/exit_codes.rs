//! Custom exit codes for the PagerTree CLI
//!
//! Codes follow the BSD sysexits.h conventions where possible, with a few
//! application specific codes above 100 so that scripts can tell network and
//! API failures apart.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagertreeExitCode {
    /// Command line usage error (64) - User input error
    UsageError = 64,

    /// Data format error (65) - Response or output data was malformed
    DataError = 65,

    /// Addressee unknown (67) - Resource not found
    NotFound = 67,

    /// Internal software error (70) - Unexpected application error
    SoftwareError = 70,

    /// Configuration error (78) - Missing API key, bad config file
    ConfigError = 78,

    /// Authentication error (100) - Rejected API key
    AuthError = 100,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API returned an error
    ApiError = 102,
}

impl PagertreeExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn message(&self) -> &'static str {
        match self {
            PagertreeExitCode::UsageError => "Command line usage error",
            PagertreeExitCode::DataError => "Data format error",
            PagertreeExitCode::NotFound => "Resource not found",
            PagertreeExitCode::SoftwareError => "Internal software error",
            PagertreeExitCode::ConfigError => "Configuration error",
            PagertreeExitCode::AuthError => "Authentication error",
            PagertreeExitCode::NetworkError => "Network communication error",
            PagertreeExitCode::ApiError => "Remote API error",
        }
    }

    /// Exit code for a failure reported by the API client
    pub fn for_api_error(error: &crate::pagertree::ApiError) -> PagertreeExitCode {
        use crate::pagertree::ApiError;
        match error {
            ApiError::Validation(_) => PagertreeExitCode::UsageError,
            ApiError::NotFound(_) => PagertreeExitCode::NotFound,
            ApiError::RequestFailed { status: 401 | 403, .. } => PagertreeExitCode::AuthError,
            ApiError::RequestFailed { .. } => PagertreeExitCode::ApiError,
            ApiError::Transport(_) => PagertreeExitCode::NetworkError,
            ApiError::Json(_) => PagertreeExitCode::DataError,
        }
    }
}

impl From<PagertreeExitCode> for i32 {
    fn from(code: PagertreeExitCode) -> Self {
        code.code()
    }
}
