//! `bridge create` command - Open a new issue.

use anyhow::{Context, Result};
use bridge_github::CreateIssue;

use super::utils;
use crate::output;

/// Run the create command.
pub fn run(title: &str, body: &str, labels: Vec<String>, api_url: Option<&str>) -> Result<()> {
    let client = utils::github_client(api_url)?;
    let rt = utils::runtime()?;

    output::info(&format!("Opening issue in {}...", utils::repo_slug(&client)));

    let request = CreateIssue::new(title)
        .with_body(body)
        .with_labels(labels);
    let created = rt
        .block_on(client.create_issue(&request))
        .context("Failed to create issue")?;

    output::success(&format!("Opened issue #{}", created.number));
    output::essential(&created.html_url);

    Ok(())
}
