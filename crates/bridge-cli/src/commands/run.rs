//! `bridge run` command - Start the Discord bot.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use bridge_core::{DiscordConfig, Settings};

use super::utils;
use crate::bot::{self, Handler};
use crate::output;

/// Run the bot until the gateway connection ends.
pub fn run(settings_path: Option<&Path>, api_url: Option<&str>) -> Result<()> {
    let client = utils::github_client(api_url)?;
    let discord = DiscordConfig::from_env().context("Discord is not configured")?;
    let settings = Settings::load_or_default(settings_path)?;

    output::info(&format!(
        "Relaying {} with prefix `{}`",
        utils::repo_slug(&client),
        settings.prefix
    ));

    let handler = Handler::new(Arc::new(client), settings);
    let rt = utils::runtime()?;
    rt.block_on(bot::start(&discord, handler))
}
