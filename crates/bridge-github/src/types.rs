//! GitHub API types.

use serde::{Deserialize, Serialize};

/// A GitHub issue as returned by the issue listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue title.
    pub title: String,

    /// Issue number, when the response includes it.
    #[serde(default)]
    pub number: Option<u64>,

    /// Issue web URL, when the response includes it.
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Request to create an issue.
///
/// The target repository is always the one held by the client's
/// configuration, so it is not part of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateIssue {
    /// Issue title.
    pub title: String,

    /// Issue body.
    pub body: String,

    /// Labels to apply.
    pub labels: Vec<String>,
}

impl CreateIssue {
    /// Create a request with a title and no body or labels.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the issue body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Add labels to the issue.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }
}

/// Result of creating an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCreated {
    /// Issue number.
    pub number: u64,

    /// API URL of the issue.
    pub url: String,

    /// Web URL of the issue.
    pub html_url: String,
}

/// Wire body for an issue comment.
#[derive(Debug, Serialize)]
pub(crate) struct CreateComment {
    pub body: String,
}

/// Wire body for issue creation.
///
/// Owner, repository and API version are echoed in the payload alongside the
/// issue fields.
#[derive(Debug, Serialize)]
pub(crate) struct CreateIssuePayload<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub labels: &'a [String],
    pub headers: PayloadHeaders,
}

#[derive(Debug, Serialize)]
pub(crate) struct PayloadHeaders {
    #[serde(rename = "X-GitHub-Api-Version")]
    pub api_version: &'static str,
}
