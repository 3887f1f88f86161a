//! `bridge comment` command - Comment on an existing issue.

use anyhow::{Context, Result};

use super::utils;
use crate::output;

/// Run the comment command.
pub fn run(number: u64, body: &str, api_url: Option<&str>) -> Result<()> {
    let client = utils::github_client(api_url)?;
    let rt = utils::runtime()?;

    rt.block_on(client.create_issue_comment(number, body))
        .with_context(|| format!("Failed to comment on issue #{number}"))?;

    output::success(&format!("Commented on issue #{number}"));

    Ok(())
}
