//! # bridge-github
//!
//! GitHub issue tracker integration for the GitHub-Discord bridge: listing
//! issues, opening new ones and commenting on existing ones.
//!
//! # Security
//!
//! The API token is stored as a `SecretString`, which is zeroized on drop and
//! never shows up in `Debug` output.

mod client;
mod config;
mod error;
mod types;

pub use client::GitHubClient;
pub use config::GitHubConfig;
pub use error::{Error, Result};
// Re-export SecretString for constructing a GitHubConfig by hand
pub use secrecy::SecretString;
pub use types::{CreateIssue, Issue, IssueCreated};
