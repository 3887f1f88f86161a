//! Error types for GitHub operations.

/// Result type for GitHub operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more required environment variables are unset or empty.
    #[error("missing configuration: {} must be set", variables.join(", "))]
    MissingConfiguration {
        /// Names of the variables that were missing.
        variables: Vec<&'static str>,
    },

    /// Building, sending or reading an HTTP request failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request body could not be encoded or a response body decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// GitHub rejected the token.
    #[error("authentication failed (401): {message}")]
    AuthenticationFailed {
        /// Response body returned by GitHub.
        message: String,
    },

    /// GitHub answered with a non-success status.
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Response body returned by GitHub.
        message: String,
    },
}

impl Error {
    /// HTTP status code of the response that caused this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed { .. } => Some(401),
            Self::ApiError { status, .. } => Some(*status),
            Self::MissingConfiguration { .. } | Self::Http(_) | Self::Json(_) => None,
        }
    }
}
