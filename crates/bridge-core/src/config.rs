//! Discord credentials.

use secrecy::SecretString;

use crate::error::{Error, Result};

/// Environment variable holding the Discord bot token.
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";

/// Credentials for the Discord gateway.
pub struct DiscordConfig {
    token: SecretString,
}

impl DiscordConfig {
    /// Load the bot token from the process environment.
    ///
    /// # Errors
    /// Returns [`Error::MissingConfiguration`] if `DISCORD_TOKEN` is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the bot token through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns [`Error::MissingConfiguration`] if the token is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(DISCORD_TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingConfiguration(DISCORD_TOKEN_VAR))?;

        Ok(Self {
            token: SecretString::from(token),
        })
    }

    /// The bot token.
    #[must_use]
    pub const fn token(&self) -> &SecretString {
        &self.token
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"[redacted]")
            .finish()
    }
}
