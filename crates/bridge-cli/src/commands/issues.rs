//! `bridge issues` command - List issue titles.

use anyhow::{Context, Result};

use super::utils;
use crate::output;

/// Run the issues command.
pub fn run(json: bool, api_url: Option<&str>) -> Result<()> {
    let client = utils::github_client(api_url)?;
    let rt = utils::runtime()?;

    let issues = rt
        .block_on(client.list_issues())
        .context("Failed to list issues")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    if issues.is_empty() {
        output::info(&format!("No open issues in {}", utils::repo_slug(&client)));
        return Ok(());
    }

    for issue in &issues {
        let reference = output::issue_ref(issue.number);
        if reference.is_empty() {
            output::essential(&issue.title);
        } else {
            output::essential(&format!("{reference} {}", issue.title));
        }
    }

    Ok(())
}
