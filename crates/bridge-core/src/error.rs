//! Error types for bridge-core.

use std::path::PathBuf;

/// Result type for bridge-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing commands or loading settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is unset or empty.
    #[error("missing configuration: {0} must be set")]
    MissingConfiguration(&'static str),

    /// The command keyword is not recognised.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// `issue` was given without a title.
    #[error("an issue needs a title")]
    MissingTitle,

    /// `comment` was given without an issue number.
    #[error("a comment needs an issue number")]
    MissingIssueNumber,

    /// The issue number is not a positive integer.
    #[error("invalid issue number: {0}")]
    InvalidIssueNumber(String),

    /// `comment` was given without any text.
    #[error("a comment needs some text")]
    MissingCommentBody,

    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has the wrong shape.
    #[error("invalid settings in {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The command prefix is empty.
    #[error("command prefix must not be empty")]
    EmptyPrefix,
}

impl Error {
    /// Whether this error came from parsing a chat command.
    ///
    /// These are the user's mistakes and are answered with usage hints.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand(_)
                | Self::MissingTitle
                | Self::MissingIssueNumber
                | Self::InvalidIssueNumber(_)
                | Self::MissingCommentBody
        )
    }
}
