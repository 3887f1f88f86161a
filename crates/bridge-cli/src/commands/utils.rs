use anyhow::{Context, Result};
use bridge_github::{GitHubClient, GitHubConfig};

/// Helper to load the GitHub configuration and build a client.
pub fn github_client(api_url: Option<&str>) -> Result<GitHubClient> {
    let config = GitHubConfig::from_env().context("GitHub is not configured")?;

    let client = match api_url {
        Some(url) => GitHubClient::with_base_url(config, url),
        None => GitHubClient::new(config),
    };

    client.context("Failed to build GitHub client")
}

/// Helper to get a runtime for one-shot commands.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("Failed to start async runtime")
}

/// `owner/repo` of the configured repository.
pub fn repo_slug(client: &GitHubClient) -> String {
    format!("{}/{}", client.config().author(), client.config().repo())
}
