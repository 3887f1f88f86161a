//! Repository coordinates and credentials for the GitHub API.

use secrecy::SecretString;

use crate::error::{Error, Result};

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Environment variable holding the repository name.
pub const REPO_VAR: &str = "GITHUB_REPO";
/// Environment variable holding the repository owner.
pub const AUTHOR_VAR: &str = "GITHUB_AUTHOR";

/// Token, repository and owner used to address every API call.
///
/// Built once at startup and handed to [`GitHubClient`](crate::GitHubClient);
/// there is no way to change it afterwards.
pub struct GitHubConfig {
    token: SecretString,
    repo: String,
    author: String,
}

impl GitHubConfig {
    /// Build a configuration from explicit values.
    ///
    /// # Errors
    /// Returns [`Error::MissingConfiguration`] if any value is blank.
    pub fn new(
        token: impl Into<String>,
        repo: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self> {
        let (token, repo, author) = (token.into(), repo.into(), author.into());
        Self::from_lookup(|name| match name {
            TOKEN_VAR => Some(token.clone()),
            REPO_VAR => Some(repo.clone()),
            AUTHOR_VAR => Some(author.clone()),
            _ => None,
        })
    }

    /// Load the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`Error::MissingConfiguration`] if `GITHUB_TOKEN`,
    /// `GITHUB_REPO` or `GITHUB_AUTHOR` is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns [`Error::MissingConfiguration`] naming every variable that is
    /// missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| {
            let value = lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let token = read(TOKEN_VAR);
        let repo = read(REPO_VAR);
        let author = read(AUTHOR_VAR);

        if !missing.is_empty() {
            return Err(Error::MissingConfiguration { variables: missing });
        }

        Ok(Self {
            token: SecretString::from(token),
            repo,
            author,
        })
    }

    /// Repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Repository owner.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    pub(crate) const fn token(&self) -> &SecretString {
        &self.token
    }
}

impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("token", &"[redacted]")
            .field("repo", &self.repo)
            .field("author", &self.author)
            .finish()
    }
}
