//! GitHub API client.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::config::GitHubConfig;
use crate::error::{Error, Result};
use crate::types::{
    CreateComment, CreateIssue, CreateIssuePayload, Issue, IssueCreated, PayloadHeaders,
};

/// GitHub API client bound to a single repository.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    config: GitHubConfig,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// REST API version sent with every request.
    pub const API_VERSION: &'static str = "2022-11-28";

    /// Create a new GitHub client.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: GitHubConfig) -> Result<Self> {
        Self::with_base_url(config, Self::DEFAULT_API_URL)
    }

    /// Create a new GitHub client with a custom API URL (for GitHub Enterprise).
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(config: GitHubConfig, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("github-discord-bridge"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(Self::API_VERSION),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            config,
        })
    }

    /// Configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &GitHubConfig {
        &self.config
    }

    fn repo_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.config.author(),
            self.config.repo()
        )
    }

    /// Make a GET request.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "GET", path, "github request");
        self.send(self.client.get(&url)).await
    }

    /// Make a POST request.
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "POST", path, "github request");
        let body = serde_json::to_vec(body)?;
        let request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        self.send(request).await
    }

    /// Authenticate, send, check the status and decode the body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .header(
                AUTHORIZATION,
                format!("token {}", self.config.token().expose_secret()),
            )
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        let status_code = status.as_u16();
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status_code, "github request failed");

        match status_code {
            401 => Err(Error::AuthenticationFailed { message }),
            _ => Err(Error::ApiError {
                status: status_code,
                message,
            }),
        }
    }

    // === Issue Operations ===

    /// List the first page of issues in the configured repository.
    ///
    /// # Errors
    /// Returns error if the request fails, GitHub answers with a non-success
    /// status, or the response is not a JSON array of issues.
    pub async fn list_issues(&self) -> Result<Vec<Issue>> {
        self.get(&format!("{}/issues", self.repo_path())).await
    }

    /// List the titles of the first page of issues, in response order.
    ///
    /// # Errors
    /// See [`GitHubClient::list_issues`].
    pub async fn list_issue_titles(&self) -> Result<Vec<String>> {
        Ok(self
            .list_issues()
            .await?
            .into_iter()
            .map(|issue| issue.title)
            .collect())
    }

    /// Create an issue in the configured repository.
    ///
    /// Calling this twice creates two issues.
    ///
    /// # Errors
    /// Returns error if issue creation fails.
    pub async fn create_issue(&self, issue: &CreateIssue) -> Result<IssueCreated> {
        let payload = CreateIssuePayload {
            owner: self.config.author(),
            repo: self.config.repo(),
            title: &issue.title,
            body: &issue.body,
            labels: &issue.labels,
            headers: PayloadHeaders {
                api_version: Self::API_VERSION,
            },
        };

        self.post(&format!("{}/issues", self.repo_path()), &payload)
            .await
    }

    /// Comment on an issue in the configured repository.
    ///
    /// The response must be valid JSON but its content is discarded.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_issue_comment(&self, number: u64, body: impl Into<String>) -> Result<()> {
        let comment = CreateComment { body: body.into() };
        let _: IgnoredAny = self
            .post(
                &format!("{}/issues/{number}/comments", self.repo_path()),
                &comment,
            )
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
