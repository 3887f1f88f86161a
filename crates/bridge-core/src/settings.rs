//! Bot behaviour settings.
//!
//! Settings live in an optional TOML file:
//!
//! ```toml
//! prefix = "!"
//! default_labels = ["discord"]
//! allowed_channels = [123456789012345678]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings controlling how the bot reacts to chat messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Prefix marking a message as a bridge command.
    pub prefix: String,

    /// Labels added to every issue opened from chat.
    pub default_labels: Vec<String>,

    /// Channel IDs the bot listens in. Empty means every channel.
    pub allowed_channels: Vec<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            default_labels: Vec::new(),
            allowed_channels: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid TOML, or sets
    /// an empty prefix.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;

        if settings.prefix.trim().is_empty() {
            return Err(Error::EmptyPrefix);
        }

        Ok(settings)
    }

    /// Load settings from `path` if given, otherwise use the defaults.
    ///
    /// # Errors
    /// See [`Settings::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Whether the bot should react to messages in `channel_id`.
    #[must_use]
    pub fn allows_channel(&self, channel_id: u64) -> bool {
        self.allowed_channels.is_empty() || self.allowed_channels.contains(&channel_id)
    }
}
